//! Schema model, value types, and error taxonomy for the `recwire` codec.
//!
//! This crate provides the wire-independent building blocks: the validated
//! [`Schema`] / [`Field`] model with optional [`LogicalType`] annotations,
//! the [`Value`] host representation, and the typed errors shared by the
//! converter and codec layers.

mod error;
mod schema;
mod value;

pub use error::{DecodeError, EncodeError, SchemaError, ValueTypeError};
pub use schema::{BaseType, Field, Fields, LogicalType, Schema, format_fields};
pub use value::Value;
