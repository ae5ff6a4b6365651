//! 报表投递 trait 定义

use std::path::Path;

use async_trait::async_trait;
use splash_errors::ReportResult;

/// 报表邮件发送者
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// 以附件形式发送指定文件
    async fn send_report(&self, path: &Path) -> ReportResult<()>;
}
