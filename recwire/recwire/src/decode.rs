//! Schema-order record decoding with strict framing.

use bytes::{Buf, Bytes};
use recwire_core::{BaseType, DecodeError, Field, Fields, Schema, Value};
use recwire_logical::Registry;

use crate::{buffer::EncodedBuffer, record::OpenRecord};

/// Decode `buffer` under `schema`, reading fields in schema order.
///
/// The buffer must carry the identity of the same schema. Every byte is
/// accounted for: exhausting the buffer mid-field fails with
/// [`DecodeError::Truncated`], leftover bytes fail with
/// [`DecodeError::TrailingBytes`]. No forward-compatible skip logic.
pub fn decode(
    schema: &Schema,
    buffer: &EncodedBuffer,
    registry: &Registry,
) -> Result<OpenRecord, DecodeError> {
    if buffer.schema_name() != schema.name() || buffer.fingerprint() != schema.fingerprint() {
        return Err(DecodeError::SchemaMismatch {
            expected: schema.name().to_string(),
            actual: buffer.schema_name().to_string(),
        });
    }

    let mut reader = Reader {
        buf: Bytes::copy_from_slice(buffer.as_bytes()),
    };
    let pairs = reader.read_fields(schema.fields(), registry)?;
    if reader.buf.remaining() > 0 {
        return Err(DecodeError::TrailingBytes {
            remaining: reader.buf.remaining(),
        });
    }
    Ok(pairs.into_iter().collect())
}

struct Reader {
    buf: Bytes,
}

impl Reader {
    fn read_fields(
        &mut self,
        fields: &Fields,
        registry: &Registry,
    ) -> Result<Vec<(String, Value)>, DecodeError> {
        let mut out = Vec::with_capacity(fields.len());
        for field in fields.iter() {
            let wire = self.read_base(field, registry)?;
            let value = match field.logical() {
                Some(logical) => registry.converter_for(logical).decode(wire, field)?,
                None => wire,
            };
            out.push((field.name.clone(), value));
        }
        Ok(out)
    }

    fn read_base(&mut self, field: &Field, registry: &Registry) -> Result<Value, DecodeError> {
        let truncated = || DecodeError::Truncated {
            field: field.name.clone(),
        };

        Ok(match &field.base {
            BaseType::Int32 => Value::Int32(self.buf.try_get_i32().map_err(|_| truncated())?),
            BaseType::Int64 => Value::Int64(self.buf.try_get_i64().map_err(|_| truncated())?),
            BaseType::Str => {
                let len = self.buf.try_get_u32().map_err(|_| truncated())? as usize;
                let raw = self.read_bytes(len, field)?;
                let s = String::from_utf8(raw.to_vec()).map_err(|source| {
                    DecodeError::InvalidUtf8 {
                        field: field.name.clone(),
                        source,
                    }
                })?;
                Value::string(s)
            }
            BaseType::Bytes => {
                let len = self.buf.try_get_u32().map_err(|_| truncated())? as usize;
                Value::bytes(self.read_bytes(len, field)?)
            }
            BaseType::Fixed(size) => Value::bytes(self.read_bytes(*size, field)?),
            BaseType::Record(nested) => Value::Record(self.read_fields(nested, registry)?),
        })
    }

    fn read_bytes(&mut self, n: usize, field: &Field) -> Result<Bytes, DecodeError> {
        if self.buf.remaining() < n {
            return Err(DecodeError::Truncated {
                field: field.name.clone(),
            });
        }
        Ok(self.buf.copy_to_bytes(n))
    }
}
