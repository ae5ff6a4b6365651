//! 报表组装

use std::path::PathBuf;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;
use splash_errors::{ReportError, ReportResult};
use tracing::debug;

use crate::{LoginAttempt, LoginAttemptCollection, ReportTable, convert_login_at};

/// 报表周期回溯的天数
pub const LOOKBACK_DAYS: i64 = 30;

pub const REPORT_FILE_PREFIX: &str = "splash_login_success";

/// 一次运行产出的报表
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub table: ReportTable,
    /// `now - 30 天`，只用于命名，与数据内容无关
    pub period: NaiveDate,
    pub file_name: String,
    pub path: PathBuf,
}

/// 报表组装器
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    output_directory: PathBuf,
}

impl ReportBuilder {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// 过滤成功登录、转换时间并组装表格
    ///
    /// 任意一条成功记录的 `loginAt` 无法解析时整个报表失败。
    pub fn build(
        &self,
        attempts: LoginAttemptCollection,
        now: NaiveDateTime,
    ) -> ReportResult<Report> {
        let total = attempts.len();
        let mut retained = successful_attempts(attempts);

        for (index, attempt) in retained.iter_mut().enumerate() {
            let converted = match attempt.login_at() {
                Some(value) => convert_login_at(value)?,
                None => {
                    return Err(ReportError::timestamp(
                        record_label(index, attempt),
                        "missing loginAt",
                    ));
                }
            };
            attempt.set_login_at(converted);
        }

        debug!(total, retained = retained.len(), "Filtered login attempts");

        let table = ReportTable::from_records(&retained);
        let period = reporting_period(now);
        let file_name = report_file_name(period);
        let path = self.output_directory.join(&file_name);

        Ok(Report {
            table,
            period,
            file_name,
            path,
        })
    }
}

/// 只保留 `authorization == "success"` 的记录，顺序不变
pub fn successful_attempts(attempts: LoginAttemptCollection) -> LoginAttemptCollection {
    attempts.into_iter().filter(|a| a.is_success()).collect()
}

/// 错误信息里定位记录：成功记录中的序号，以及客户端 MAC（如果有）
fn record_label(index: usize, attempt: &LoginAttempt) -> String {
    match attempt.get("clientMac").and_then(Value::as_str) {
        Some(mac) => format!("success record #{} (clientMac {})", index, mac),
        None => format!("success record #{}", index),
    }
}

/// "上个月"：当前时间减 30 天，不是日历上的上一个月
pub fn reporting_period(now: NaiveDateTime) -> NaiveDate {
    (now - Duration::days(LOOKBACK_DAYS)).date()
}

/// 例如 `splash_login_success_16_may_2024.xlsx`
pub fn report_file_name(period: NaiveDate) -> String {
    format!(
        "{}_{:02}_{}_{}.xlsx",
        REPORT_FILE_PREFIX,
        period.day(),
        period.format("%B").to_string().to_lowercase(),
        period.year()
    )
}
