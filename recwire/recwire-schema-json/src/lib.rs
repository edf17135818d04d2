//! Declarative JSON schema source producing a validated
//! [`Schema`](recwire_core::Schema).
//!
//! The document shape follows the common Avro record form: a named record
//! with a field list, logical annotations either on the field or inside a
//! type object. Unknown logical-type names are tolerated: the annotation is
//! dropped and the base type kept.

mod error;
mod parser;

pub use error::SchemaJsonError;
pub use parser::parse_schema;
