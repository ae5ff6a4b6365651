//! 登录记录

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `authorization` 字段表示登录成功的取值
pub const AUTHORIZATION_SUCCESS: &str = "success";

pub const AUTHORIZATION_FIELD: &str = "authorization";

pub const LOGIN_AT_FIELD: &str = "loginAt";

/// Splash 页面的一条登录记录
///
/// 保留 API 返回的全部字段及其顺序，只有 `loginAt` 会被改写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginAttempt(Map<String, Value>);

impl LoginAttempt {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// 缺失或不是字符串时返回 `None`
    pub fn authorization(&self) -> Option<&str> {
        self.0.get(AUTHORIZATION_FIELD).and_then(Value::as_str)
    }

    pub fn login_at(&self) -> Option<&str> {
        self.0.get(LOGIN_AT_FIELD).and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.authorization() == Some(AUTHORIZATION_SUCCESS)
    }

    pub fn set_login_at(&mut self, value: String) {
        self.0.insert(LOGIN_AT_FIELD.to_string(), Value::String(value));
    }
}

impl From<Map<String, Value>> for LoginAttempt {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// API 返回的登录记录，保持接收顺序
pub type LoginAttemptCollection = Vec<LoginAttempt>;

/// 一次拉取的结果
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// HTTP 200，附带解码后的记录
    Attempts(LoginAttemptCollection),
    /// 非 200 响应，本次运行不再继续
    NoData { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attempt(value: Value) -> LoginAttempt {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_is_success() {
        assert!(attempt(json!({"authorization": "success"})).is_success());
        assert!(!attempt(json!({"authorization": "failure"})).is_success());
        assert!(!attempt(json!({"authorization": "Success"})).is_success());
        assert!(!attempt(json!({"authorization": null})).is_success());
        assert!(!attempt(json!({"name": "no authorization"})).is_success());
    }

    #[test]
    fn test_set_login_at_keeps_field_position() {
        let mut record = attempt(json!({
            "name": "a",
            "loginAt": "2024-05-10T12:00:00.000000Z",
            "ssid": "Guest",
        }));

        record.set_login_at("10/05/2024 09:00:00".to_string());

        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "loginAt", "ssid"]);
        assert_eq!(record.login_at(), Some("10/05/2024 09:00:00"));
    }

    #[test]
    fn test_collection_rejects_non_objects() {
        let result: Result<LoginAttemptCollection, _> =
            serde_json::from_value(json!([{"authorization": "success"}, 42]));
        assert!(result.is_err());
    }
}
