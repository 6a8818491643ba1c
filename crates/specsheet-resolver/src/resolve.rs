//! Pointer resolution and schema inlining.
//!
//! `resolve_reference` is a deliberately narrow pointer parser: only
//! `#/components/schemas/<Name>` is supported, every other shape
//! (external files, pointers into `parameters` or `responses`) is
//! rejected rather than guessed at. `expand_schema` walks a schema's
//! fields and replaces each reference with a structural copy of the
//! referenced schema, recursively.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

/// The single supported reference location.
const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Backstop against pathological nesting. Acyclic reference chains in
/// real documents sit far below this; past it expansion stops
/// descending and keeps the node as-is.
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Look up the schema a reference string points at.
///
/// Returns `None` for malformed or empty strings, for any pointer shape
/// other than `#/components/schemas/<Name>`, and for names absent from
/// the table.
pub fn resolve_reference<'a>(
    ref_str: &str,
    schemas: &'a Map<String, Value>,
) -> Option<&'a Value> {
    schemas.get(schema_name(ref_str)?)
}

/// Extract the schema name from a reference string, rejecting every
/// other pointer shape.
fn schema_name(ref_str: &str) -> Option<&str> {
    let name = ref_str.strip_prefix(SCHEMA_REF_PREFIX)?;
    if name.is_empty() || name.contains('/') {
        return None;
    }
    Some(name)
}

/// Produce a fully inlined copy of `schema`.
///
/// Pure over its inputs: the original value and the schema table are
/// never mutated. Every object field carrying a `$ref` is replaced by
/// the expanded body of the referenced schema; object fields without a
/// `$ref` are recursed into; array elements carrying a `$ref` are
/// replaced element-wise. Unresolvable references stay in the output
/// untouched.
///
/// Cycles terminate: a set of names on the current expansion path is
/// threaded through, and re-entering a name leaves that `$ref` object
/// in place as the revisit marker.
pub fn expand_schema(schema: &Value, schemas: &Map<String, Value>) -> Value {
    let mut expanding = HashSet::new();
    expand_value(schema, schemas, &mut expanding, 0)
}

/// [`expand_schema`], serialized as indented JSON for presentation.
pub fn expand_schema_pretty(schema: &Value, schemas: &Map<String, Value>) -> String {
    let expanded = expand_schema(schema, schemas);
    serde_json::to_string_pretty(&expanded).unwrap_or_else(|_| expanded.to_string())
}

fn expand_value(
    schema: &Value,
    schemas: &Map<String, Value>,
    expanding: &mut HashSet<String>,
    depth: usize,
) -> Value {
    if depth > MAX_EXPANSION_DEPTH {
        warn!(depth, "schema expansion depth cap reached, keeping node as-is");
        return schema.clone();
    }

    let obj = match schema.as_object() {
        Some(o) => o,
        None => return schema.clone(),
    };

    let mut copy = Map::with_capacity(obj.len());
    for (key, value) in obj {
        let new_value = match value {
            Value::Object(field) => match ref_of(field) {
                Some(ref_str) => expand_ref(ref_str, schemas, expanding, depth)
                    .unwrap_or_else(|| value.clone()),
                None => expand_value(value, schemas, expanding, depth + 1),
            },
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item.as_object().and_then(ref_of) {
                        Some(ref_str) => expand_ref(ref_str, schemas, expanding, depth)
                            .unwrap_or_else(|| item.clone()),
                        None => item.clone(),
                    })
                    .collect(),
            ),
            other => other.clone(),
        };
        copy.insert(key.clone(), new_value);
    }

    Value::Object(copy)
}

/// Expand one reference occurrence. `None` means the caller keeps the
/// original pointer value.
fn expand_ref(
    ref_str: &str,
    schemas: &Map<String, Value>,
    expanding: &mut HashSet<String>,
    depth: usize,
) -> Option<Value> {
    let name = schema_name(ref_str)?;
    let target = schemas.get(name)?;

    if !expanding.insert(name.to_string()) {
        warn!(schema = name, "cyclic schema reference, leaving pointer in place");
        return None;
    }
    debug!(schema = name, depth, "inlining schema reference");

    let expanded = expand_value(target, schemas, expanding, depth + 1);
    expanding.remove(name);
    Some(expanded)
}

/// The non-empty `$ref` string of an object, if it carries one.
fn ref_of(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("$ref")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}
