//! Schema-governed binary record codec with pluggable logical-type
//! conversions.
//!
//! [`encode`] walks a [`Schema`] against a [`Record`] (typed or open),
//! routing logically annotated fields through a [`Registry`] of converters
//! and writing plain fields literally; [`decode`] reads the same wire layout
//! back with strict framing. Transport, routing, and remote schema catalogs
//! are external collaborators: this crate only consumes a resolved schema
//! and produces/consumes byte buffers.

mod buffer;
mod decode;
mod encode;
mod record;

pub use buffer::EncodedBuffer;
pub use decode::decode;
pub use encode::encode;
pub use record::{OpenRecord, Record};

pub use recwire_core as core;
pub use recwire_logical as logical;
#[cfg(feature = "schema-json")]
pub use recwire_schema_json as schema_json;

pub use recwire_core::{
    BaseType, DecodeError, EncodeError, Field, Fields, LogicalType, Schema, SchemaError, Value,
};
pub use recwire_logical::Registry;
