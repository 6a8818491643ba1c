//! Flattening a parsed document into report rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use specsheet_resolver::{
    expand_schema_pretty, resolve_reference, select_schema_ref, REQUEST_MEDIA_PRIORITY,
    RESPONSE_MEDIA_PRIORITY,
};
use specsheet_spec_parser::{ApiDocument, ContentEntry, Operation};

/// Cell placeholder for absent optional structure.
const EMPTY_CELL: &str = "-";
/// Cell placeholder when no schema can be produced for a body.
const NO_SCHEMA: &str = "No schema";

/// Column headers, in row-field order, for any tabular sink.
pub const COLUMN_HEADERS: &[&str] = &[
    "Api Endpoint",
    "HTTP Verb",
    "Request Parameters in Query String",
    "Request JSON Body Schema",
    "Response JSON Body Schema",
    "Response Description",
];

/// One flattened record summarizing a single API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub path: String,
    pub verb: String,
    pub parameters: String,
    pub request_schema: String,
    pub response_schema: String,
    pub response_description: String,
}

/// Flatten the document into one row per (path, verb), in document order.
///
/// Every declared verb under every declared path yields exactly one
/// row; operations with missing pieces get the `"-"` / `"No schema"`
/// placeholders instead of being dropped.
pub fn extract_rows(doc: &ApiDocument) -> Vec<Row> {
    let mut rows = Vec::new();

    for item in &doc.paths {
        for op in &item.operations {
            rows.push(build_row(&item.path, op, doc));
        }
    }

    debug!(rows = rows.len(), "extracted report rows");
    rows
}

fn build_row(path: &str, op: &Operation, doc: &ApiDocument) -> Row {
    let parameters = if op.parameters.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        op.parameters
            .iter()
            .map(|p| format!("{} ({})", p.name, p.location))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let request_schema = match &op.request_body {
        Some(body) => schema_cell(path, &body.content, REQUEST_MEDIA_PRIORITY, doc),
        None => NO_SCHEMA.to_string(),
    };

    let ok_response = op.responses.get("200");

    let response_schema = match ok_response {
        Some(response) => schema_cell(path, &response.content, RESPONSE_MEDIA_PRIORITY, doc),
        None => NO_SCHEMA.to_string(),
    };

    let response_description = ok_response
        .and_then(|r| r.description.clone())
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    Row {
        path: path.to_string(),
        verb: op.method.clone(),
        parameters,
        request_schema,
        response_schema,
        response_description,
    }
}

/// Negotiate a body's content map down to one inlined schema string.
fn schema_cell(
    path: &str,
    content: &BTreeMap<String, ContentEntry>,
    priority: &[&str],
    doc: &ApiDocument,
) -> String {
    let ref_str = match select_schema_ref(content, priority) {
        Some(r) => r,
        None => return NO_SCHEMA.to_string(),
    };

    match resolve_reference(ref_str, &doc.schemas) {
        Some(target) => expand_schema_pretty(target, &doc.schemas),
        None => {
            warn!(path, reference = ref_str, "unresolved schema reference");
            NO_SCHEMA.to_string()
        }
    }
}
