//! Media-type negotiation over a body's `content` map.
//!
//! The preference orders are declared data, not per-call-site logic:
//! request bodies and responses each carry their own list.

use std::collections::BTreeMap;

use specsheet_spec_parser::ContentEntry;

/// Media types accepted for request bodies, most preferred first.
pub const REQUEST_MEDIA_PRIORITY: &[&str] =
    &["application/json", "text/json", "application/*+json"];

/// Media types accepted for responses, most preferred first.
pub const RESPONSE_MEDIA_PRIORITY: &[&str] = &["application/json", "text/plain", "text/json"];

/// Return the `$ref` string under the first priority media type whose
/// entry carries one.
///
/// Priority order decides, not document order. Entries that embed an
/// inline schema body instead of a reference are skipped, as are
/// entries with an empty `$ref`. `None` when nothing matches.
pub fn select_schema_ref<'a>(
    content: &'a BTreeMap<String, ContentEntry>,
    priority: &[&str],
) -> Option<&'a str> {
    for media_type in priority {
        let ref_str = content
            .get(*media_type)
            .and_then(|entry| entry.schema.as_ref())
            .and_then(|schema| schema.get("$ref"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty());
        if let Some(ref_str) = ref_str {
            return Some(ref_str);
        }
    }
    None
}
