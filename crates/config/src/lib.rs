//! splash-config - 配置加载库
//!
//! 启动时一次性组装 [`AppConfig`]，之后按引用传入各个组件，
//! 组件本身不读取环境变量。

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};
use secrecy::Secret;
use serde::Deserialize;
use splash_errors::{ReportError, ReportResult};

/// 按原文读取的环境变量及其配置路径
///
/// 变量名沿用部署脚本里已有的扁平命名。这些值是令牌、密码、地址等文本，
/// 不经过 figment 的类型推断，`007` 仍然是 `"007"`。
const TEXT_ENV_KEYS: &[(&str, &str)] = &[
    ("APP_ENV", "app_env"),
    ("LOG_LEVEL", "telemetry.log_level"),
    ("BEARER_TOKEN", "meraki.bearer_token"),
    ("NETWORK_ID", "meraki.network_id"),
    ("MERAKI_BASE_URL", "meraki.base_url"),
    ("OUTPUT_DIRECTORY", "report.output_directory"),
    ("RECIPIENT_EMAIL", "mail.recipient_email"),
    ("SENDER_EMAIL", "mail.sender_email"),
    ("SENDER_PASSWORD", "mail.sender_password"),
    ("SMTP_SERVER", "mail.smtp_server"),
];

/// 需要解析为数值的环境变量
const NUMERIC_ENV_KEYS: &[(&str, &str)] = &[
    ("REQUEST_TIMEOUT_SECS", "meraki.request_timeout_secs"),
    ("TIMESPAN_SECONDS", "report.timespan_seconds"),
    ("SMTP_PORT", "mail.smtp_port"),
];

/// Meraki Dashboard API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct MerakiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub network_id: String,
    pub bearer_token: Secret<String>,
    /// 0 表示不设置超时
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.meraki.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// 报表配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_timespan_seconds")]
    pub timespan_seconds: u64,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

fn default_timespan_seconds() -> u64 {
    // 30 天
    2_592_000
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("reports")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timespan_seconds: default_timespan_seconds(),
            output_directory: default_output_directory(),
        }
    }
}

/// 邮件配置
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub recipient_email: String,
    pub sender_email: String,
    pub sender_password: Secret<String>,
    pub smtp_server: String,
    pub smtp_port: u16,
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub meraki: MerakiConfig,
    #[serde(default)]
    pub report: ReportConfig,
    pub mail: MailConfig,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 加载 `.env`，再从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> ReportResult<Self> {
        // .env 不存在时忽略
        dotenvy::dotenv().ok();
        Self::extract(config_dir)
    }

    /// 从配置文件和当前进程环境变量加载配置（不读取 `.env`）
    ///
    /// 合并顺序：`default.toml` < `{APP_ENV}.toml` < 环境变量，
    /// 两个配置文件都是可选的。
    pub fn extract(config_dir: &str) -> ReportResult<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        let figment = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::raw().filter_map(|key| {
                NUMERIC_ENV_KEYS
                    .iter()
                    .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                    .map(|(_, path)| Uncased::from(*path))
            }));

        TEXT_ENV_KEYS
            .iter()
            .filter_map(|(name, path)| std::env::var(name).ok().map(|value| (*path, value)))
            .fold(figment, |figment, (path, value)| {
                figment.merge(Serialized::default(path, value))
            })
            .extract()
            .map_err(|e| ReportError::config(e.to_string()))
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
