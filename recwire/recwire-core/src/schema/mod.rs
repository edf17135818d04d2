//! Validated record schema: ordered fields with optional logical annotations.

mod format;
mod types;

pub use format::format_fields;
pub use types::{BaseType, Field, Fields, LogicalType};

use std::{
    collections::HashSet,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc,
};

use crate::error::SchemaError;

/// A named, immutable record schema.
///
/// Construction validates the field list (unique names, logical/base
/// compatibility, decimal bounds), recursively through nested records.
/// After construction the schema is read-only and safe to share across
/// concurrent encode/decode calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: Arc<str>,
    fields: Fields,
    fingerprint: u64,
}

impl Schema {
    pub fn new(name: impl Into<Arc<str>>, fields: Vec<Field>) -> Result<Self, SchemaError> {
        let name = name.into();
        let fields = Fields::new(fields);
        validate_fields(&fields)?;

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        // Error is unreachable: writing to a String cannot fail.
        format_fields(&fields).unwrap_or_default().hash(&mut hasher);
        let fingerprint = hasher.finish();

        Ok(Self {
            name,
            fields,
            fingerprint,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Stable identity of this schema's name and canonical field layout,
    /// used for decode-side buffer validation.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Resolve a field by name.
    pub fn field(&self, name: &str) -> Result<&Field, SchemaError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| SchemaError::UnknownField {
                schema: self.name.to_string(),
                name: name.to_string(),
            })
    }
}

fn validate_fields(fields: &Fields) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields.iter() {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                name: field.name.clone(),
            });
        }
        validate_field(field)?;
    }
    Ok(())
}

fn validate_field(field: &Field) -> Result<(), SchemaError> {
    if let BaseType::Fixed(0) = field.base {
        return Err(SchemaError::InvalidFixedSize {
            field: field.name.clone(),
        });
    }

    if let Some(logical) = &field.logical {
        let compatible = match logical {
            LogicalType::Decimal { .. } => {
                matches!(field.base, BaseType::Bytes | BaseType::Fixed(_))
            }
            LogicalType::Date => matches!(field.base, BaseType::Int32),
            LogicalType::TimestampMillis => matches!(field.base, BaseType::Int64),
        };
        if !compatible {
            return Err(SchemaError::IncompatibleLogicalType {
                field: field.name.clone(),
                logical: logical.name(),
                base: field.base.type_name(),
            });
        }
        if let LogicalType::Decimal { precision, scale } = logical
            && (*precision < 1 || scale > precision)
        {
            return Err(SchemaError::InvalidDecimal {
                field: field.name.clone(),
                precision: *precision,
                scale: *scale,
            });
        }
    }

    if let BaseType::Record(nested) = &field.base {
        validate_fields(nested)?;
    }
    Ok(())
}
