//! Decimal ↔ two's-complement big-endian unscaled integer conversion.

use recwire_core::{BaseType, DecodeError, EncodeError, Field, LogicalType, Value};
use rust_decimal::Decimal;

use crate::converter::Converter;

/// Converts [`Value::Decimal`] to the schema-declared `(precision, scale)`
/// wire form: the unscaled integer as a minimal-length two's-complement
/// big-endian byte sequence, sign-extended to the exact size for fixed
/// fields.
///
/// Precision is a contract, not a storage optimization: a value whose
/// required precision exceeds the declared precision fails at encode time,
/// and scale must match the declared scale exactly.
#[derive(Debug, Default)]
pub struct DecimalConverter;

impl Converter for DecimalConverter {
    fn encode(&self, host: &Value, field: &Field) -> Result<Value, EncodeError> {
        let (precision, scale) = contract(field).ok_or_else(|| EncodeError::TypeMismatch {
            field: field.name.clone(),
            source: host.type_mismatch("decimal-annotated field"),
        })?;
        let value = host.try_decimal().map_err(|e| EncodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;

        let required = digit_count(value.mantissa().unsigned_abs());
        if required > precision {
            return Err(EncodeError::PrecisionExceeded {
                field: field.name.clone(),
                required,
                declared: precision,
            });
        }
        if value.scale() != scale {
            return Err(EncodeError::ScaleMismatch {
                field: field.name.clone(),
                value_scale: value.scale(),
                declared_scale: scale,
            });
        }

        let unscaled = to_twos_complement(value.mantissa());
        match field.base {
            BaseType::Fixed(size) => {
                if unscaled.len() > size {
                    return Err(EncodeError::DecimalOverflowsFixed {
                        field: field.name.clone(),
                        needed: unscaled.len(),
                        size,
                    });
                }
                let sign = if value.mantissa() < 0 { 0xFF } else { 0x00 };
                let mut padded = vec![sign; size - unscaled.len()];
                padded.extend_from_slice(&unscaled);
                Ok(Value::bytes(padded))
            }
            _ => Ok(Value::bytes(unscaled)),
        }
    }

    fn decode(&self, wire: Value, field: &Field) -> Result<Value, DecodeError> {
        let (_, scale) = contract(field).ok_or_else(|| DecodeError::TypeMismatch {
            field: field.name.clone(),
            source: wire.type_mismatch("decimal-annotated field"),
        })?;
        let span = wire.try_bytes().map_err(|e| DecodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;

        if span.is_empty() {
            return Err(malformed(field, "empty unscaled integer"));
        }
        if span.len() > 16 {
            return Err(malformed(field, "unscaled integer exceeds 128 bits"));
        }
        if let BaseType::Fixed(size) = field.base
            && span.len() != size
        {
            return Err(malformed(
                field,
                format!("{} bytes in a fixed({size}) field", span.len()),
            ));
        }

        let sign = if span[0] & 0x80 != 0 { 0xFF } else { 0x00 };
        let mut buf = [sign; 16];
        buf[16 - span.len()..].copy_from_slice(span);
        let mantissa = i128::from_be_bytes(buf);

        let value = Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| malformed(field, "unscaled integer out of decimal range"))?;
        Ok(Value::Decimal(value))
    }
}

fn contract(field: &Field) -> Option<(u32, u32)> {
    match field.logical() {
        Some(LogicalType::Decimal { precision, scale }) => Some((*precision, *scale)),
        _ => None,
    }
}

fn malformed(field: &Field, detail: impl Into<String>) -> DecodeError {
    DecodeError::MalformedBytes {
        field: field.name.clone(),
        detail: detail.into(),
    }
}

/// Number of significant decimal digits of `m` (1 for zero).
fn digit_count(mut m: u128) -> u32 {
    let mut digits = 1;
    while m >= 10 {
        m /= 10;
        digits += 1;
    }
    digits
}

/// Minimal-length two's-complement big-endian representation of `m`.
fn to_twos_complement(m: i128) -> Vec<u8> {
    let bytes = m.to_be_bytes();
    let sign = if m < 0 { 0xFF } else { 0x00 };
    let mut start = 0;
    // Drop redundant leading sign bytes while the sign bit stays intact.
    while start < bytes.len() - 1
        && bytes[start] == sign
        && (bytes[start + 1] & 0x80) == (sign & 0x80)
    {
        start += 1;
    }
    bytes[start..].to_vec()
}
