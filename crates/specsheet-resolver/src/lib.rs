//! Schema reference resolution engine.
//!
//! Takes raw `serde_json` schema values plus the document's
//! `components.schemas` table and produces fully inlined (dereferenced)
//! schemas. Resolution failures degrade per-field: an unresolvable
//! `$ref` stays in the output untouched, nothing here returns an error.

pub mod negotiate;
pub mod resolve;

pub use negotiate::{select_schema_ref, REQUEST_MEDIA_PRIORITY, RESPONSE_MEDIA_PRIORITY};
pub use resolve::{
    expand_schema, expand_schema_pretty, resolve_reference, MAX_EXPANSION_DEPTH,
};
