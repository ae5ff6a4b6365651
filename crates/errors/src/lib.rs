//! splash-errors - 统一错误处理
//!
//! 报表任务的错误分类，每一类映射到独立的进程退出码

use thiserror::Error;

/// 报表任务错误类型
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Mail error: {0}")]
    Mail(String),
}

impl ReportError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn timestamp(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Timestamp {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn spreadsheet(msg: impl Into<String>) -> Self {
        Self::Spreadsheet(msg.into())
    }

    pub fn mail(msg: impl Into<String>) -> Self {
        Self::Mail(msg.into())
    }

    /// 错误类别名称（用于结构化日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Http(_) => "http",
            Self::Decode(_) => "decode",
            Self::Timestamp { .. } => "timestamp",
            Self::Io(_) => "io",
            Self::Spreadsheet(_) => "spreadsheet",
            Self::Mail(_) => "mail",
        }
    }

    /// 转换为进程退出码
    ///
    /// 数据契约错误（JSON 与时间戳）共用同一个退出码，
    /// 文件系统与工作簿错误共用同一个退出码。
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Http(_) => 3,
            Self::Decode(_) | Self::Timestamp { .. } => 4,
            Self::Io(_) | Self::Spreadsheet(_) => 5,
            Self::Mail(_) => 6,
        }
    }
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_stage() {
        assert_eq!(ReportError::config("missing").exit_code(), 2);
        assert_eq!(ReportError::http("refused").exit_code(), 3);
        assert_eq!(ReportError::decode("not an array").exit_code(), 4);
        assert_eq!(ReportError::timestamp("bad", "input is out of range").exit_code(), 4);
        assert_eq!(ReportError::spreadsheet("too many columns").exit_code(), 5);
        assert_eq!(ReportError::mail("auth failed").exit_code(), 6);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ReportError::from(io).exit_code(), 5);
    }

    #[test]
    fn test_timestamp_message_includes_value() {
        let err = ReportError::timestamp("2024-13-01", "input is out of range");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp \"2024-13-01\": input is out of range"
        );
        assert_eq!(err.kind(), "timestamp");
    }
}
