//! Splash Login Report - 每月 Splash 页面成功登录报表
//!
//! 从 Meraki 拉取登录记录，生成 xlsx 报表并通过邮件发送

pub mod pipeline;

pub use pipeline::{PipelineSettings, RunOutcome, run_pipeline};
