//! ports - 抽象 trait 层
//!
//! 报表流水线依赖的外部协作方接口

mod login_attempt_source;
mod report_mailer;
mod report_writer;

pub use login_attempt_source::*;
pub use report_mailer::*;
pub use report_writer::*;
