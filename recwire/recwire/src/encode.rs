//! Schema-order record encoding.

use recwire_core::{BaseType, EncodeError, Field, Fields, Schema, Value};
use recwire_logical::Registry;

use crate::{
    buffer::EncodedBuffer,
    record::{PairsRecord, Record},
};

/// Encode `record` under `schema`, writing fields in schema order.
///
/// Logically annotated fields go through the registry's converter; plain
/// fields are written literally. Missing fields fall back to the schema
/// default, or fail with [`EncodeError::MissingField`].
pub fn encode(
    schema: &Schema,
    record: &dyn Record,
    registry: &Registry,
) -> Result<EncodedBuffer, EncodeError> {
    let mut out = Vec::new();
    encode_fields(schema.fields(), record, registry, &mut out)?;
    Ok(EncodedBuffer::new(schema, out))
}

fn encode_fields(
    fields: &Fields,
    record: &dyn Record,
    registry: &Registry,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    for field in fields.iter() {
        let value = record
            .field(&field.name)
            .or_else(|| field.default.clone())
            .ok_or_else(|| EncodeError::MissingField {
                field: field.name.clone(),
            })?;

        let wire = match field.logical() {
            Some(logical) => registry.converter_for(logical).encode(&value, field)?,
            None => value,
        };
        write_base(field, &wire, registry, out)?;
    }
    Ok(())
}

fn write_base(
    field: &Field,
    wire: &Value,
    registry: &Registry,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    match &field.base {
        BaseType::Int32 => {
            let v = wire.try_i32().map_err(|e| mismatch(field, e))?;
            out.extend_from_slice(&v.to_be_bytes());
        }
        BaseType::Int64 => {
            let v = wire.try_i64().map_err(|e| mismatch(field, e))?;
            out.extend_from_slice(&v.to_be_bytes());
        }
        BaseType::Str => {
            let s = wire.try_str().map_err(|e| mismatch(field, e))?;
            write_len_prefixed(field, s.as_bytes(), out)?;
        }
        BaseType::Bytes => {
            let b = wire.try_bytes().map_err(|e| mismatch(field, e))?;
            write_len_prefixed(field, b, out)?;
        }
        BaseType::Fixed(size) => {
            let b = wire.try_bytes().map_err(|e| mismatch(field, e))?;
            if b.len() != *size {
                return Err(EncodeError::FixedSizeMismatch {
                    field: field.name.clone(),
                    expected: *size,
                    actual: b.len(),
                });
            }
            out.extend_from_slice(b);
        }
        BaseType::Record(nested) => {
            let pairs = wire.try_record().map_err(|e| mismatch(field, e))?;
            encode_fields(nested, &PairsRecord(pairs), registry, out)?;
        }
    }
    Ok(())
}

fn write_len_prefixed(field: &Field, data: &[u8], out: &mut Vec<u8>) -> Result<(), EncodeError> {
    let len = u32::try_from(data.len()).map_err(|_| EncodeError::Oversized {
        field: field.name.clone(),
        len: data.len(),
    })?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(data);
    Ok(())
}

fn mismatch(field: &Field, source: recwire_core::ValueTypeError) -> EncodeError {
    EncodeError::TypeMismatch {
        field: field.name.clone(),
        source,
    }
}
