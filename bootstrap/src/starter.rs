//! 任务启动器
//!
//! 提供统一的批处理任务启动模式

use std::fmt::Debug;
use std::future::Future;
use std::process::ExitCode;

use splash_config::AppConfig;
use splash_errors::{ReportError, ReportResult};
use splash_telemetry::init_tracing;
use tracing::{error, info};

use crate::runtime::{DEFAULT_LOG_LEVEL, init_runtime};

/// 运行一次批处理任务
///
/// 1. 加载配置（`.env`、配置文件、环境变量）
/// 2. 初始化运行时（日志）
/// 3. 调用用户提供的闭包执行任务
/// 4. 按错误类别返回退出码，成功时返回 0
///
/// # 示例
///
/// ```ignore
/// use splash_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> std::process::ExitCode {
///     run("config", |config| async move { do_work(&config).await }).await
/// }
/// ```
pub async fn run<F, Fut, T>(config_dir: &str, job: F) -> ExitCode
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = ReportResult<T>>,
    T: Debug,
{
    // 1. 加载配置
    let config = match AppConfig::load(config_dir) {
        Ok(config) => config,
        Err(e) => {
            // 配置不可用时仍然需要输出错误
            init_tracing(DEFAULT_LOG_LEVEL);
            return report_failure(&e);
        }
    };

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting splash login report");

    // 3. 执行任务
    match job(config).await {
        Ok(outcome) => {
            info!(?outcome, "Report job finished");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(err: &ReportError) -> ExitCode {
    error!(kind = err.kind(), error = %err, "Report job failed");
    ExitCode::from(err.exit_code())
}
