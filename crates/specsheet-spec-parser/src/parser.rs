use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ParseError;
use crate::model::{
    ApiDocument, ContentEntry, Operation, ParamLocation, Parameter, PathItem, RequestBody,
    ResponseSpec,
};

/// HTTP methods we recognize in OpenAPI path items.
const HTTP_METHODS: &[&str] = &[
    "get", "post", "put", "delete", "patch", "head", "options", "trace",
];

/// Parse an OpenAPI 3.x document from a YAML/JSON string.
pub fn parse_document(input: &str) -> Result<ApiDocument, ParseError> {
    // Parse YAML (also handles JSON since JSON is valid YAML)
    let root: Value = serde_yaml::from_str(input).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let root_obj = root
        .as_object()
        .ok_or_else(|| ParseError::Structure("document root must be an object".into()))?;

    let version = detect_version(root_obj)?;

    let title = root_obj
        .get("info")
        .and_then(|v| v.get("title"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let paths = parse_paths(root_obj)?;

    let schemas = root_obj
        .get("components")
        .and_then(|v| v.get("schemas"))
        .and_then(|v| v.as_object())
        .cloned()
        .unwrap_or_default();

    Ok(ApiDocument {
        filename: None,
        version,
        title,
        paths,
        schemas,
    })
}

/// Parse a document from a file path.
pub fn parse_document_file(path: &std::path::Path) -> Result<ApiDocument, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let mut doc = parse_document(&content)?;
    doc.filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string());
    Ok(doc)
}

/// Check the root `openapi` field and extract the version.
fn detect_version(root: &serde_json::Map<String, Value>) -> Result<String, ParseError> {
    let version = root
        .get("openapi")
        .and_then(|v| v.as_str())
        .ok_or(ParseError::UnknownFormat)?;

    if !version.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    Ok(version.to_string())
}

/// Parse the `paths` tree, preserving document order of paths and verbs.
fn parse_paths(root: &serde_json::Map<String, Value>) -> Result<Vec<PathItem>, ParseError> {
    let mut items = Vec::new();

    let paths = match root.get("paths").and_then(|v| v.as_object()) {
        Some(p) => p,
        None => return Ok(items), // No paths is valid (empty API)
    };

    for (path, path_value) in paths {
        let path_obj = path_value.as_object().ok_or_else(|| {
            ParseError::Structure(format!("path item for '{}' must be an object", path))
        })?;

        // Path-level parameters (inherited by all operations)
        let path_params = parse_parameters(path_obj);

        let mut operations = Vec::new();

        // Iterate the path item itself so verbs keep document order
        for (key, op_value) in path_obj {
            if !HTTP_METHODS.contains(&key.as_str()) {
                continue;
            }

            let op_obj = op_value.as_object().ok_or_else(|| {
                ParseError::Structure(format!(
                    "operation {} {} must be an object",
                    key.to_uppercase(),
                    path
                ))
            })?;

            // Merge path-level and operation-level parameters
            let mut params = path_params.clone();
            params.extend(parse_parameters(op_obj));

            operations.push(Operation {
                method: key.to_uppercase(),
                parameters: params,
                request_body: parse_request_body(op_obj),
                responses: parse_responses(op_obj),
            });
        }

        items.push(PathItem {
            path: path.clone(),
            operations,
        });
    }

    Ok(items)
}

/// Parse parameters from a path item or operation object.
fn parse_parameters(obj: &serde_json::Map<String, Value>) -> Vec<Parameter> {
    obj.get("parameters")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|item| {
                    let param_obj = item.as_object()?;
                    Some(Parameter {
                        name: param_obj.get("name")?.as_str()?.to_string(),
                        location: ParamLocation::parse(param_obj.get("in")?.as_str()?)?,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the request body content map from an operation object.
fn parse_request_body(obj: &serde_json::Map<String, Value>) -> Option<RequestBody> {
    let body = obj.get("requestBody")?.as_object()?;
    let content = parse_content(body);
    Some(RequestBody { content })
}

/// Parse the responses map from an operation object.
fn parse_responses(obj: &serde_json::Map<String, Value>) -> BTreeMap<String, ResponseSpec> {
    let mut responses = BTreeMap::new();

    let responses_obj = match obj.get("responses").and_then(|v| v.as_object()) {
        Some(r) => r,
        None => return responses,
    };

    for (status, response_value) in responses_obj {
        let response_obj = match response_value.as_object() {
            Some(o) => o,
            None => continue,
        };

        let description = response_obj
            .get("description")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        responses.insert(
            status.clone(),
            ResponseSpec {
                description,
                content: parse_content(response_obj),
            },
        );
    }

    responses
}

/// Parse a `content` map (media type -> schema-or-ref) from a body object.
fn parse_content(obj: &serde_json::Map<String, Value>) -> BTreeMap<String, ContentEntry> {
    let mut content = BTreeMap::new();

    let content_obj = match obj.get("content").and_then(|v| v.as_object()) {
        Some(c) => c,
        None => return content,
    };

    for (media_type, media_value) in content_obj {
        let schema = media_value
            .as_object()
            .and_then(|o| o.get("schema").cloned());
        content.insert(media_type.clone(), ContentEntry { schema });
    }

    content
}
