//! XLSX writer

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use serde_json::Value;
use splash_domain::ReportTable;
use splash_errors::{ReportError, ReportResult};
use splash_ports::ReportWriter;
use tracing::info;

/// Writes report tables as `.xlsx` workbooks
#[derive(Debug, Clone, Default)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `table` to `path`, creating missing directories and
    /// overwriting any existing file.
    pub fn write_table(&self, table: &ReportTable, path: &Path) -> ReportResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header = Format::new().set_bold();

        for (col, name) in table.columns().iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_num(col)?, name, &header)
                .map_err(map_xlsx_error)?;
        }

        for (index, row) in table.rows().iter().enumerate() {
            let row_num = row_num(index + 1)?;
            for (col, value) in row.iter().enumerate() {
                write_cell(worksheet, row_num, col_num(col)?, value)?;
            }
        }

        workbook.save(path).map_err(map_xlsx_error)?;

        info!(path = %path.display(), rows = table.len(), "Report saved");
        Ok(())
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, table: &ReportTable, path: &Path) -> ReportResult<()> {
        self.write_table(table, path)
    }
}

/// Null cells stay empty; nested values are written as compact JSON.
fn write_cell(worksheet: &mut Worksheet, row: RowNum, col: ColNum, value: &Value) -> ReportResult<()> {
    let result = match value {
        Value::Null => return Ok(()),
        Value::Bool(b) => worksheet.write_boolean(row, col, *b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => worksheet.write_number(row, col, f),
            None => worksheet.write_string(row, col, n.to_string()),
        },
        Value::String(s) => worksheet.write_string(row, col, s),
        Value::Array(_) | Value::Object(_) => worksheet.write_string(row, col, value.to_string()),
    };

    result.map(|_| ()).map_err(map_xlsx_error)
}

fn row_num(index: usize) -> ReportResult<RowNum> {
    RowNum::try_from(index)
        .map_err(|_| ReportError::spreadsheet(format!("Row {} exceeds worksheet limits", index)))
}

fn col_num(index: usize) -> ReportResult<ColNum> {
    ColNum::try_from(index)
        .map_err(|_| ReportError::spreadsheet(format!("Column {} exceeds worksheet limits", index)))
}

fn map_xlsx_error(err: XlsxError) -> ReportError {
    match err {
        XlsxError::IoError(e) => ReportError::Io(e),
        other => ReportError::spreadsheet(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use serde_json::json;
    use splash_domain::LoginAttempt;

    fn table(value: Value) -> ReportTable {
        let records: Vec<LoginAttempt> = serde_json::from_value(value).unwrap();
        ReportTable::from_records(&records)
    }

    /// Read the first worksheet back as rows of cells, A1 first
    fn read_back(path: &Path) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range("Sheet1").unwrap();
        assert!(
            range.is_empty() || range.start() == Some((0, 0)),
            "sheet does not start at A1"
        );
        range.rows().map(|row| row.to_vec()).collect()
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_write_header_and_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/splash_login_success_16_may_2024.xlsx");

        let table = table(json!([
            {"name": "a", "loginAt": "10/05/2024 09:00:00", "ssid": "Guest"},
            {"name": "b", "loginAt": "11/05/2024 09:00:00", "port": 3, "blocked": false, "tags": ["x"]},
        ]));

        XlsxReportWriter::new().write(&table, &path).unwrap();

        // No index column: A1 holds the first field name
        assert_eq!(
            read_back(&path),
            vec![
                vec![
                    text("name"),
                    text("loginAt"),
                    text("ssid"),
                    text("port"),
                    text("blocked"),
                    text("tags"),
                ],
                vec![
                    text("a"),
                    text("10/05/2024 09:00:00"),
                    text("Guest"),
                    Data::Empty,
                    Data::Empty,
                    Data::Empty,
                ],
                vec![
                    text("b"),
                    text("11/05/2024 09:00:00"),
                    Data::Empty,
                    Data::Float(3.0),
                    Data::Bool(false),
                    text(r#"["x"]"#),
                ],
            ]
        );
    }

    #[test]
    fn test_write_missing_leading_field_leaves_cell_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let table = table(json!([
            {"name": "a", "loginAt": "10/05/2024 09:00:00"},
            {"loginAt": "11/05/2024 09:00:00", "ssid": "Guest"},
        ]));

        XlsxReportWriter::new().write(&table, &path).unwrap();

        let rows = read_back(&path);
        assert_eq!(rows[0], vec![text("name"), text("loginAt"), text("ssid")]);
        assert_eq!(rows[1], vec![text("a"), text("10/05/2024 09:00:00"), Data::Empty]);
        assert_eq!(rows[2], vec![Data::Empty, text("11/05/2024 09:00:00"), text("Guest")]);
    }

    #[test]
    fn test_write_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        XlsxReportWriter::new()
            .write(&ReportTable::default(), &path)
            .unwrap();

        assert!(read_back(&path).is_empty());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        fs::write(&path, b"stale contents").unwrap();

        let writer = XlsxReportWriter::new();
        writer
            .write(&table(json!([{"name": "old", "ssid": "Old"}, {"name": "older"}])), &path)
            .unwrap();
        writer.write(&table(json!([{"name": "new"}])), &path).unwrap();

        assert_eq!(read_back(&path), vec![vec![text("name")], vec![text("new")]]);
    }

    #[test]
    fn test_write_into_file_parent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let err = XlsxReportWriter::new()
            .write(&ReportTable::default(), &blocker.join("report.xlsx"))
            .unwrap_err();
        assert_eq!(err.kind(), "io");
    }
}
