//! 报表持久化 trait 定义

use std::path::Path;

use splash_domain::ReportTable;
use splash_errors::ReportResult;

/// 报表写入器
pub trait ReportWriter: Send + Sync {
    /// 写入报表文件，目录不存在时创建，已有文件被覆盖
    fn write(&self, table: &ReportTable, path: &Path) -> ReportResult<()>;
}
