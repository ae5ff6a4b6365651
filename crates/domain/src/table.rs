//! 报表表格

use serde_json::Value;

use crate::LoginAttempt;

/// 由登录记录组装成的二维表
///
/// 列为所有记录中出现过的字段（按首次出现的顺序），
/// 记录缺少的字段在对应单元格中为 `Value::Null`。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ReportTable {
    pub fn from_records(records: &[LoginAttempt]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.fields().keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 按列名读取单元格
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }
}
