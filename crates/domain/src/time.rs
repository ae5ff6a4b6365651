//! 登录时间转换

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use splash_errors::{ReportError, ReportResult};

/// API 返回的 UTC 时间格式，例如 `2024-05-10T12:00:00.000000Z`
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// 报表中的展示格式
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// 报表使用的本地时区
pub const REPORT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// 将 API 的 UTC 时间转换为报表时区下的展示字符串
pub fn convert_login_at(value: &str) -> ReportResult<String> {
    let utc = NaiveDateTime::parse_from_str(value, WIRE_FORMAT)
        .map_err(|e| ReportError::timestamp(value, e))?;

    let local = Utc.from_utc_datetime(&utc).with_timezone(&REPORT_TIMEZONE);

    Ok(local.format(DISPLAY_FORMAT).to_string())
}
