//! Date and timestamp-millis conversions.

use chrono::{DateTime, NaiveDate, TimeDelta};
use recwire_core::{DecodeError, EncodeError, Field, Value};

use crate::converter::Converter;

/// Converts [`Value::Date`] to days since 1970-01-01 as `int32`.
///
/// A date is a pure calendar value; no timezone is involved.
#[derive(Debug, Default)]
pub struct DateConverter;

impl Converter for DateConverter {
    fn encode(&self, host: &Value, field: &Field) -> Result<Value, EncodeError> {
        let date = host.try_date().map_err(|e| EncodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;
        // chrono's representable range stays well within i32 days.
        let days = date.signed_duration_since(NaiveDate::default()).num_days() as i32;
        Ok(Value::Int32(days))
    }

    fn decode(&self, wire: Value, field: &Field) -> Result<Value, DecodeError> {
        let days = wire.try_i32().map_err(|e| DecodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;
        let date = NaiveDate::default()
            .checked_add_signed(TimeDelta::days(i64::from(days)))
            .ok_or_else(|| DecodeError::MalformedBytes {
                field: field.name.clone(),
                detail: format!("day offset {days} is out of calendar range"),
            })?;
        Ok(Value::Date(date))
    }
}

/// Converts [`Value::Timestamp`] to milliseconds since the Unix epoch as
/// `int64`.
///
/// Sub-millisecond precision on the host value is truncated on encode, not
/// rounded; the boundary is lossy in that direction only.
#[derive(Debug, Default)]
pub struct TimestampMillisConverter;

impl Converter for TimestampMillisConverter {
    fn encode(&self, host: &Value, field: &Field) -> Result<Value, EncodeError> {
        let ts = host.try_timestamp().map_err(|e| EncodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;
        Ok(Value::Int64(ts.timestamp_millis()))
    }

    fn decode(&self, wire: Value, field: &Field) -> Result<Value, DecodeError> {
        let millis = wire.try_i64().map_err(|e| DecodeError::TypeMismatch {
            field: field.name.clone(),
            source: e,
        })?;
        let ts = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            DecodeError::MalformedBytes {
                field: field.name.clone(),
                detail: format!("millisecond offset {millis} is out of range"),
            }
        })?;
        Ok(Value::Timestamp(ts))
    }
}
