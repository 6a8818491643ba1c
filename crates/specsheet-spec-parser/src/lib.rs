//! OpenAPI 3.x document parser.
//!
//! Reads YAML/JSON documents and extracts the `paths` tree (in document
//! order) and the `components.schemas` table. Only the subtrees the
//! report needs are consumed; everything else is ignored.

pub mod error;
pub mod model;
pub mod parser;

pub use error::ParseError;
pub use model::{
    ApiDocument, ContentEntry, Operation, ParamLocation, Parameter, PathItem, RequestBody,
    ResponseSpec,
};
pub use parser::{parse_document, parse_document_file};
