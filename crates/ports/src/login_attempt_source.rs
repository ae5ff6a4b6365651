//! 登录记录来源 trait 定义

use async_trait::async_trait;
use splash_domain::FetchOutcome;
use splash_errors::ReportResult;

/// 登录记录来源
#[async_trait]
pub trait LoginAttemptSource: Send + Sync {
    /// 拉取指定网络在最近 `timespan_seconds` 秒内的登录记录
    ///
    /// 非 200 响应返回 `FetchOutcome::NoData`，传输失败或响应体无法解码返回错误。
    async fn fetch_login_attempts(
        &self,
        network_id: &str,
        timespan_seconds: u64,
    ) -> ReportResult<FetchOutcome>;
}
