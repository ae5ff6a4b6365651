//! 任务运行时

use splash_config::AppConfig;
use splash_telemetry::{init_tracing, init_tracing_json};
use tracing::info;

/// 配置加载失败时使用的日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 初始化任务运行时
pub fn init_runtime(config: &AppConfig) {
    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_env = %config.app_env,
        network_id = %config.meraki.network_id,
        "Runtime initialized"
    );
}
