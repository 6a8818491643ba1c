//! Report extraction and rendering.
//!
//! Flattens a parsed [`ApiDocument`](specsheet_spec_parser::ApiDocument)
//! into one [`Row`] per (path, verb), with request/response body
//! schemas fully inlined, then renders the rows as a plain-text table
//! or JSON.

pub mod render;
pub mod row;

pub use render::{render_report, ReportError, ReportFormat};
pub use row::{extract_rows, Row, COLUMN_HEADERS};
