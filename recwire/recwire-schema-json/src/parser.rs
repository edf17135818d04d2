//! JSON document → validated schema.

use recwire_core::{BaseType, Field, LogicalType, Schema, Value};
use serde_json::{Map, Value as Json};

use crate::error::SchemaJsonError;

/// Parse a JSON schema document into a validated [`Schema`].
pub fn parse_schema(text: &str) -> Result<Schema, SchemaJsonError> {
    let doc: Json = serde_json::from_str(text).map_err(|source| SchemaJsonError::Json { source })?;
    let root = as_object(&doc, "schema root")?;

    let name = str_member(root, "name", "schema root")?;
    let fields = parse_field_list(root, "schema root")?;
    Ok(Schema::new(name, fields)?)
}

fn parse_field_list(obj: &Map<String, Json>, ctx: &str) -> Result<Vec<Field>, SchemaJsonError> {
    let raw = obj
        .get("fields")
        .and_then(Json::as_array)
        .ok_or_else(|| invalid(format!("{ctx} needs a 'fields' array")))?;

    let mut fields = Vec::with_capacity(raw.len());
    for entry in raw {
        fields.push(parse_field(entry)?);
    }
    Ok(fields)
}

fn parse_field(entry: &Json) -> Result<Field, SchemaJsonError> {
    let obj = as_object(entry, "field")?;
    let name = str_member(obj, "name", "field")?;

    let ty = obj
        .get("type")
        .ok_or_else(|| invalid(format!("field '{name}' needs a 'type'")))?;
    let (base, type_attrs) = parse_type(name, ty)?;

    // A logical annotation may sit on the field itself or inside the type
    // object; the field-level one wins when both are present.
    let logical = parse_logical(name, obj)?.or(match type_attrs {
        Some(attrs) => parse_logical(name, attrs)?,
        None => None,
    });

    let default = match obj.get("default") {
        Some(raw) => Some(parse_default(name, &base, raw)?),
        None => None,
    };

    Ok(Field {
        name: name.to_string(),
        base,
        logical,
        default,
    })
}

/// Returns the base type and, for object-form types, the attribute map so
/// the caller can look for an embedded logical annotation.
fn parse_type<'a>(
    field: &str,
    ty: &'a Json,
) -> Result<(BaseType, Option<&'a Map<String, Json>>), SchemaJsonError> {
    match ty {
        Json::String(name) => Ok((named_base(field, name)?, None)),
        Json::Object(attrs) => {
            let kind = str_member(attrs, "type", "type object")?;
            let base = match kind {
                "fixed" => {
                    let size = attrs
                        .get("size")
                        .and_then(Json::as_u64)
                        .ok_or_else(|| invalid(format!("fixed field '{field}' needs a 'size'")))?;
                    BaseType::Fixed(size as usize)
                }
                "record" => BaseType::Record(parse_field_list(attrs, "record type")?.into()),
                other => named_base(field, other)?,
            };
            Ok((base, Some(attrs)))
        }
        _ => Err(invalid(format!("field '{field}' has an unsupported type form"))),
    }
}

fn named_base(field: &str, name: &str) -> Result<BaseType, SchemaJsonError> {
    match name {
        "int" | "int32" => Ok(BaseType::Int32),
        "long" | "int64" => Ok(BaseType::Int64),
        "string" => Ok(BaseType::Str),
        "bytes" => Ok(BaseType::Bytes),
        other => Err(invalid(format!("field '{field}' has unknown type '{other}'"))),
    }
}

fn parse_logical(
    field: &str,
    attrs: &Map<String, Json>,
) -> Result<Option<LogicalType>, SchemaJsonError> {
    let Some(name) = attrs.get("logicalType").and_then(Json::as_str) else {
        return Ok(None);
    };
    match name {
        "decimal" => {
            let precision = u32_member(attrs, "precision", field)?;
            let scale = attrs
                .get("scale")
                .map(|_| u32_member(attrs, "scale", field))
                .transpose()?
                .unwrap_or(0);
            Ok(Some(LogicalType::Decimal { precision, scale }))
        }
        "date" => Ok(Some(LogicalType::Date)),
        "timestamp-millis" => Ok(Some(LogicalType::TimestampMillis)),
        // Unknown logical types are dropped, keeping the base type.
        _ => Ok(None),
    }
}

fn parse_default(field: &str, base: &BaseType, raw: &Json) -> Result<Value, SchemaJsonError> {
    let value = match (base, raw) {
        (BaseType::Int32, Json::Number(n)) => n.as_i64().and_then(|v| {
            i32::try_from(v).ok().map(Value::Int32)
        }),
        (BaseType::Int64, Json::Number(n)) => n.as_i64().map(Value::Int64),
        (BaseType::Str, Json::String(s)) => Some(Value::string(s)),
        _ => None,
    };
    value.ok_or_else(|| invalid(format!("field '{field}' has an unsupported default")))
}

fn as_object<'a>(value: &'a Json, ctx: &str) -> Result<&'a Map<String, Json>, SchemaJsonError> {
    value
        .as_object()
        .ok_or_else(|| invalid(format!("{ctx} must be a JSON object")))
}

fn str_member<'a>(
    obj: &'a Map<String, Json>,
    key: &str,
    ctx: &str,
) -> Result<&'a str, SchemaJsonError> {
    obj.get(key)
        .and_then(Json::as_str)
        .ok_or_else(|| invalid(format!("{ctx} needs a string '{key}'")))
}

fn u32_member(obj: &Map<String, Json>, key: &str, field: &str) -> Result<u32, SchemaJsonError> {
    obj.get(key)
        .and_then(Json::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| invalid(format!("decimal field '{field}' needs a numeric '{key}'")))
}

fn invalid(detail: impl Into<String>) -> SchemaJsonError {
    SchemaJsonError::Invalid {
        detail: detail.into(),
    }
}
