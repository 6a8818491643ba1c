use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed OpenAPI document, reduced to the subtrees the report consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Source filename, when loaded from disk.
    pub filename: Option<String>,
    /// The `openapi` version string (e.g. "3.0.3").
    pub version: String,
    /// The `info.title` field, if present.
    pub title: Option<String>,
    /// Path items in document order.
    pub paths: Vec<PathItem>,
    /// The `components.schemas` table, keyed by schema name.
    ///
    /// Keeps the raw JSON schema bodies; reference resolution happens
    /// downstream. Insertion order is preserved.
    pub schemas: serde_json::Map<String, serde_json::Value>,
}

/// One `paths` entry with its operations in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathItem {
    /// The path template (e.g. "/users/{id}").
    pub path: String,
    /// Operations declared under this path, in document order.
    pub operations: Vec<Operation>,
}

/// A single API operation (one verb under one path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// The HTTP method (uppercase).
    pub method: String,
    /// Merged path-level and operation-level parameters.
    pub parameters: Vec<Parameter>,
    /// The request body, if declared.
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status-code string (e.g. "200", "default").
    pub responses: BTreeMap<String, ResponseSpec>,
}

/// A declared request parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// The `in` field.
    pub location: ParamLocation,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl ParamLocation {
    /// Parse the OpenAPI `in` value. Unknown locations are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "query" => Some(Self::Query),
            "path" => Some(Self::Path),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Cookie => "cookie",
        };
        f.write_str(s)
    }
}

/// A declared request body: media type -> content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    pub content: BTreeMap<String, ContentEntry>,
}

/// A declared response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// Free-text description, if present.
    pub description: Option<String>,
    /// Media type -> content entry. Empty when the response has no body.
    pub content: BTreeMap<String, ContentEntry>,
}

/// The value under one media type: a raw schema body or a `$ref` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub schema: Option<serde_json::Value>,
}
