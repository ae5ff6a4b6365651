//! Email 适配器
//!
//! 通过 SMTP（STARTTLS）将报表文件作为附件发送给单个收件人

mod client;

pub use client::{EmailClient, REPORT_SUBJECT};
