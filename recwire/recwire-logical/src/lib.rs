//! Logical-type conversion layer for the `recwire` codec.
//!
//! A [`Registry`] resolves a field's [`LogicalType`](recwire_core::LogicalType)
//! annotation to a [`Converter`] that maps host values (decimals, dates,
//! instants) to their wire-native base representation and back. Conversion
//! can be disabled per registry, in which case the identity [`Passthrough`]
//! is returned instead.

mod converter;
mod decimal;
mod passthrough;
mod registry;
mod temporal;

pub use converter::Converter;
pub use decimal::DecimalConverter;
pub use passthrough::Passthrough;
pub use registry::Registry;
pub use temporal::{DateConverter, TimestampMillisConverter};
