//! adapter-spreadsheet - XLSX report writer
//!
//! Persists a [`splash_domain::ReportTable`] as a single-sheet workbook:
//! bold header row, one row per record, no index column.

mod writer;

pub use writer::XlsxReportWriter;
