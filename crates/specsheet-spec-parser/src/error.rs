use thiserror::Error;

/// Errors produced while parsing an input document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Root object carries no `openapi` version field.
    #[error("not an OpenAPI document (missing 'openapi' field)")]
    UnknownFormat,

    /// `openapi` field names a version other than 3.x.
    #[error("unsupported OpenAPI version: {0} (only 3.x supported)")]
    UnsupportedVersion(String),

    /// YAML/JSON parse error.
    #[error("parse error: {0}")]
    Syntax(String),

    /// Document shape error (e.g. a path item that is not an object).
    #[error("document structure error: {0}")]
    Structure(String),

    /// I/O error reading the document file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
