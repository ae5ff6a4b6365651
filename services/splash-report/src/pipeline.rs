//! 报表流水线
//!
//! 拉取 → 组装 → 写入 → 发送，按顺序各执行一次。
//! 拉取得到非 200 响应时直接结束，不产生任何文件或邮件。

use std::path::PathBuf;

use chrono::NaiveDateTime;
use splash_config::AppConfig;
use splash_domain::{FetchOutcome, ReportBuilder};
use splash_errors::ReportResult;
use splash_ports::{LoginAttemptSource, ReportMailer, ReportWriter};
use tracing::info;

/// 流水线参数
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub network_id: String,
    pub timespan_seconds: u64,
    pub output_directory: PathBuf,
}

impl From<&AppConfig> for PipelineSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            network_id: config.meraki.network_id.clone(),
            timespan_seconds: config.report.timespan_seconds,
            output_directory: config.report.output_directory.clone(),
        }
    }
}

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// API 未返回 200，未写文件也未发送邮件
    NoData { status: u16 },
    /// 报表已写入并发送
    Delivered { path: PathBuf, rows: usize },
}

/// 执行一次完整的报表流水线
pub async fn run_pipeline<S, W, M>(
    settings: &PipelineSettings,
    source: &S,
    writer: &W,
    mailer: &M,
    now: NaiveDateTime,
) -> ReportResult<RunOutcome>
where
    S: LoginAttemptSource + ?Sized,
    W: ReportWriter + ?Sized,
    M: ReportMailer + ?Sized,
{
    // 1. 拉取
    let attempts = match source
        .fetch_login_attempts(&settings.network_id, settings.timespan_seconds)
        .await?
    {
        FetchOutcome::Attempts(attempts) => attempts,
        FetchOutcome::NoData { status } => {
            info!(status, "No login attempts fetched, skipping report");
            return Ok(RunOutcome::NoData { status });
        }
    };

    // 2. 组装
    let report = ReportBuilder::new(&settings.output_directory).build(attempts, now)?;

    // 3. 写入
    writer.write(&report.table, &report.path)?;

    // 4. 发送
    mailer.send_report(&report.path).await?;

    Ok(RunOutcome::Delivered {
        rows: report.table.len(),
        path: report.path,
    })
}
