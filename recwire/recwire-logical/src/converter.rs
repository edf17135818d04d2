//! Converter contract between host values and wire-native base values.

use recwire_core::{DecodeError, EncodeError, Field, Value};

/// Bidirectional conversion between a host value and the wire-native base
/// representation of a logically annotated field.
///
/// Implementations hold no mutable state and are shared across concurrent
/// encode/decode calls; the field's logical metadata is passed per call.
pub trait Converter: Send + Sync {
    /// Convert a host value into the field's base-type representation
    /// (e.g. a decimal into its unscaled two's-complement bytes).
    fn encode(&self, host: &Value, field: &Field) -> Result<Value, EncodeError>;

    /// Convert a base-type wire value back into the host representation.
    fn decode(&self, wire: Value, field: &Field) -> Result<Value, DecodeError>;
}
