use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

use crate::value::Value;

/// Primitive wire representation of a field, before logical interpretation.
///
/// Variant names mirror [`Value`](crate::Value) where a direct wire form
/// exists (values ↔ types).
#[derive(Debug, Clone, PartialEq)]
pub enum BaseType {
    /// 32-bit signed integer, big-endian.
    Int32,
    /// 64-bit signed integer, big-endian.
    Int64,
    /// Length-prefixed UTF-8.
    Str,
    /// Length-prefixed raw bytes.
    Bytes,
    /// Exactly `n` raw bytes, no prefix.
    Fixed(usize),
    /// Nested record, fields in declaration order.
    Record(Fields),
}

impl BaseType {
    pub fn type_name(&self) -> &'static str {
        match self {
            BaseType::Int32 => "int32",
            BaseType::Int64 => "int64",
            BaseType::Str => "string",
            BaseType::Bytes => "bytes",
            BaseType::Fixed(_) => "fixed",
            BaseType::Record(_) => "record",
        }
    }
}

/// Semantic annotation on a base type defining how wire bytes map to a
/// richer host value.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalType {
    /// Arbitrary-precision decimal: `precision` total significant digits,
    /// `scale` digits after the decimal point. Valid on bytes/fixed.
    Decimal { precision: u32, scale: u32 },
    /// Calendar date as days since 1970-01-01. Valid on int32.
    Date,
    /// Instant as milliseconds since the Unix epoch. Valid on int64.
    TimestampMillis,
}

impl LogicalType {
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Decimal { .. } => "decimal",
            LogicalType::Date => "date",
            LogicalType::TimestampMillis => "timestamp-millis",
        }
    }
}

/// A named field: base type, optional logical annotation, optional default.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub base: BaseType,
    pub logical: Option<LogicalType>,
    /// Used when an open record omits this field on encode.
    pub default: Option<Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, base: BaseType) -> Self {
        Self {
            name: name.into(),
            base,
            logical: None,
            default: None,
        }
    }

    pub fn with_logical(name: impl Into<String>, base: BaseType, logical: LogicalType) -> Self {
        Self {
            name: name.into(),
            base,
            logical: Some(logical),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn logical(&self) -> Option<&LogicalType> {
        self.logical.as_ref()
    }
}

/// Ordered collection of [`Field`] used for schema bodies and nested records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields(pub Vec<Field>);

impl Fields {
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }
}

impl From<Vec<Field>> for Fields {
    fn from(value: Vec<Field>) -> Self {
        Self(value)
    }
}

impl From<Fields> for Vec<Field> {
    fn from(value: Fields) -> Self {
        value.0
    }
}

impl AsRef<[Field]> for Fields {
    fn as_ref(&self) -> &[Field] {
        self.as_slice()
    }
}

impl Deref for Fields {
    type Target = [Field];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for Fields {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_fields(self.as_slice())?;
        f.write_str(&text)
    }
}
