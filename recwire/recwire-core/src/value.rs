//! Host-side value representation consumed and produced by the codec.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::ValueTypeError;

/// Value passed to `encode` and returned by `decode`.
///
/// All types are explicit; no lossy conversions. [`Decimal`](Value::Decimal),
/// [`Date`](Value::Date), and [`Timestamp`](Value::Timestamp) are the host
/// forms of logically annotated fields; with conversion disabled the wire
/// forms ([`Bytes`](Value::Bytes), [`Int32`](Value::Int32),
/// [`Int64`](Value::Int64)) are used directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Str(Arc<str>),
    Bytes(Arc<[u8]>),
    Decimal(Decimal),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    /// Nested record as ordered (name, value) pairs.
    Record(Vec<(String, Value)>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn try_i32(&self) -> Result<i32, ValueTypeError> {
        match self {
            Value::Int32(v) => Ok(*v),
            _ => Err(self.type_mismatch("Int32")),
        }
    }

    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::Int64(v) => Ok(*v),
            _ => Err(self.type_mismatch("Int64")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::Str(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("Str")),
        }
    }

    pub fn try_bytes(&self) -> Result<&[u8], ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(v.as_ref()),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_decimal(&self) -> Result<Decimal, ValueTypeError> {
        match self {
            Value::Decimal(v) => Ok(*v),
            _ => Err(self.type_mismatch("Decimal")),
        }
    }

    pub fn try_date(&self) -> Result<NaiveDate, ValueTypeError> {
        match self {
            Value::Date(v) => Ok(*v),
            _ => Err(self.type_mismatch("Date")),
        }
    }

    pub fn try_timestamp(&self) -> Result<DateTime<Utc>, ValueTypeError> {
        match self {
            Value::Timestamp(v) => Ok(*v),
            _ => Err(self.type_mismatch("Timestamp")),
        }
    }

    pub fn try_record(&self) -> Result<&[(String, Value)], ValueTypeError> {
        match self {
            Value::Record(v) => Ok(v.as_slice()),
            _ => Err(self.type_mismatch("Record")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Str(_) => "Str",
            Value::Bytes(_) => "Bytes",
            Value::Decimal(_) => "Decimal",
            Value::Date(_) => "Date",
            Value::Timestamp(_) => "Timestamp",
            Value::Record(_) => "Record",
        }
    }
}
