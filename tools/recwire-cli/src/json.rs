//! JSON ⇄ record value conversion for the CLI surface.
//!
//! Host-typed logical values are written as strings (decimals as decimal
//! strings, dates as `YYYY-MM-DD`, instants as RFC 3339); wire-native values
//! (for `--raw` operation) as plain numbers and byte arrays.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use recwire::{BaseType, Field, LogicalType, OpenRecord, Schema, Value};
use serde_json::{Map, Value as Json};

pub fn record_from_json(schema: &Schema, doc: &Json) -> Result<OpenRecord> {
    let obj = doc
        .as_object()
        .context("record document must be a JSON object")?;

    let mut record = OpenRecord::new();
    for field in schema.fields().iter() {
        if let Some(raw) = obj.get(&field.name) {
            record.set(field.name.clone(), value_from_json(field, raw)?);
        }
    }
    Ok(record)
}

pub fn record_to_json(schema: &Schema, record: &OpenRecord) -> Json {
    let mut obj = Map::new();
    // Schema order keeps the output stable.
    for field in schema.fields().iter() {
        if let Some(value) = record.get(&field.name) {
            obj.insert(field.name.clone(), value_to_json(value));
        }
    }
    Json::Object(obj)
}

fn value_from_json(field: &Field, raw: &Json) -> Result<Value> {
    match field.logical() {
        Some(LogicalType::Decimal { .. }) => match raw {
            Json::String(s) => Ok(Value::Decimal(s.parse().with_context(|| {
                format!("field '{}': invalid decimal literal '{s}'", field.name)
            })?)),
            Json::Array(_) => byte_array(field, raw),
            _ => bail!(
                "field '{}': decimal fields take a string or a raw byte array",
                field.name
            ),
        },
        Some(LogicalType::Date) => match raw {
            Json::String(s) => {
                let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| {
                    format!("field '{}': invalid date literal '{s}'", field.name)
                })?;
                Ok(Value::Date(date))
            }
            Json::Number(_) => int_value(field, &BaseType::Int32, raw),
            _ => bail!(
                "field '{}': date fields take 'YYYY-MM-DD' or a raw day offset",
                field.name
            ),
        },
        Some(LogicalType::TimestampMillis) => match raw {
            Json::String(s) => {
                let ts = DateTime::parse_from_rfc3339(s).with_context(|| {
                    format!("field '{}': invalid RFC 3339 instant '{s}'", field.name)
                })?;
                Ok(Value::Timestamp(ts.with_timezone(&Utc)))
            }
            Json::Number(_) => int_value(field, &BaseType::Int64, raw),
            _ => bail!(
                "field '{}': timestamp fields take RFC 3339 or a raw millisecond offset",
                field.name
            ),
        },
        None => base_from_json(field, &field.base, raw),
    }
}

fn base_from_json(field: &Field, base: &BaseType, raw: &Json) -> Result<Value> {
    match base {
        BaseType::Int32 | BaseType::Int64 => int_value(field, base, raw),
        BaseType::Str => match raw {
            Json::String(s) => Ok(Value::string(s)),
            _ => bail!("field '{}': expected a string", field.name),
        },
        BaseType::Bytes | BaseType::Fixed(_) => byte_array(field, raw),
        BaseType::Record(nested) => {
            let obj = raw
                .as_object()
                .with_context(|| format!("field '{}': expected a nested object", field.name))?;
            let mut pairs = Vec::with_capacity(nested.len());
            for child in nested.iter() {
                if let Some(child_raw) = obj.get(&child.name) {
                    pairs.push((child.name.clone(), value_from_json(child, child_raw)?));
                }
            }
            Ok(Value::Record(pairs))
        }
    }
}

fn int_value(field: &Field, base: &BaseType, raw: &Json) -> Result<Value> {
    let n = raw
        .as_i64()
        .with_context(|| format!("field '{}': expected an integer", field.name))?;
    match base {
        BaseType::Int32 => {
            let v = i32::try_from(n)
                .with_context(|| format!("field '{}': {n} does not fit int32", field.name))?;
            Ok(Value::Int32(v))
        }
        _ => Ok(Value::Int64(n)),
    }
}

fn byte_array(field: &Field, raw: &Json) -> Result<Value> {
    let items = raw
        .as_array()
        .with_context(|| format!("field '{}': expected a byte array", field.name))?;
    let mut bytes = Vec::with_capacity(items.len());
    for item in items {
        let b = item
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .with_context(|| format!("field '{}': byte values must be 0..=255", field.name))?;
        bytes.push(b);
    }
    Ok(Value::bytes(bytes))
}

fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Int32(v) => Json::from(*v),
        Value::Int64(v) => Json::from(*v),
        Value::Str(s) => Json::String(s.to_string()),
        Value::Bytes(b) => Json::Array(b.iter().map(|v| Json::from(*v)).collect()),
        Value::Decimal(d) => Json::String(d.to_string()),
        Value::Date(d) => Json::String(d.format("%Y-%m-%d").to_string()),
        Value::Timestamp(ts) => Json::String(ts.to_rfc3339()),
        Value::Record(pairs) => Json::Object(
            pairs
                .iter()
                .map(|(name, v)| (name.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}
