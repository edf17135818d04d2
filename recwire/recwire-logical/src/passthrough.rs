//! Identity converter used when logical-type conversion is disabled.

use recwire_core::{BaseType, DecodeError, EncodeError, Field, Value};

use crate::{
    converter::Converter,
    decimal::DecimalConverter,
    temporal::{DateConverter, TimestampMillisConverter},
};

/// Identity passthrough returned by a disabled registry.
///
/// Wire-native host values (raw bytes for decimals, day/millisecond integers
/// for temporals) are forwarded unmodified in both directions; the caller
/// owns the wire representation. A host-typed logical value supplied while
/// conversion is disabled still takes the strict converter path, so an
/// out-of-contract decimal surfaces `PrecisionExceeded`/`ScaleMismatch`
/// instead of producing silently wrong bytes.
#[derive(Debug, Default)]
pub struct Passthrough {
    decimal: DecimalConverter,
    date: DateConverter,
    timestamp: TimestampMillisConverter,
}

impl Converter for Passthrough {
    fn encode(&self, host: &Value, field: &Field) -> Result<Value, EncodeError> {
        match (host, &field.base) {
            (Value::Bytes(_), BaseType::Bytes | BaseType::Fixed(_)) => Ok(host.clone()),
            (Value::Int32(_), BaseType::Int32) => Ok(host.clone()),
            (Value::Int64(_), BaseType::Int64) => Ok(host.clone()),
            (Value::Decimal(_), _) => self.decimal.encode(host, field),
            (Value::Date(_), _) => self.date.encode(host, field),
            (Value::Timestamp(_), _) => self.timestamp.encode(host, field),
            _ => Err(EncodeError::TypeMismatch {
                field: field.name.clone(),
                source: host.type_mismatch(format!(
                    "wire-native {} value",
                    field.base.type_name()
                )),
            }),
        }
    }

    fn decode(&self, wire: Value, _field: &Field) -> Result<Value, DecodeError> {
        // Raw base value, no logical interpretation.
        Ok(wire)
    }
}
