//! Row rendering for the CLI sink.
//!
//! Two formats: a labeled plain-text layout for terminals and a JSON
//! array for machine consumption. Spreadsheet-style sinks consume
//! [`COLUMN_HEADERS`](crate::COLUMN_HEADERS) plus the row sequence
//! directly and are outside this crate.

use thiserror::Error;

use crate::row::{Row, COLUMN_HEADERS};

/// Errors produced while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    /// Parse a `--format` flag value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render rows in the requested format.
pub fn render_report(rows: &[Row], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(rows)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Labeled plain-text layout: one block per row, multi-line cells
/// (pretty-printed schemas) start on their own line.
fn render_text(rows: &[Row]) -> String {
    let mut out = String::new();

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&"-".repeat(60));
            out.push('\n');
        }

        let cells = [
            &row.path,
            &row.verb,
            &row.parameters,
            &row.request_schema,
            &row.response_schema,
            &row.response_description,
        ];

        for (header, cell) in COLUMN_HEADERS.iter().zip(cells) {
            if cell.contains('\n') {
                out.push_str(&format!("{}:\n{}\n", header, cell));
            } else {
                out.push_str(&format!("{}: {}\n", header, cell));
            }
        }
    }

    out
}
