use std::fmt::{Error, Result, Write as _};

use super::{BaseType, Field, LogicalType};

/// Format fields in a readable style:
/// primitive fields are rendered in one line, record fields are pretty-printed.
/// Nested fields follow the same rule. The rendering is canonical and also
/// feeds the schema fingerprint.
pub fn format_fields(fields: impl AsRef<[Field]>) -> std::result::Result<String, Error> {
    let fields = fields.as_ref();
    let mut out = String::new();

    for field in fields.iter() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &Field, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match &field.base {
        BaseType::Record(fields) => {
            writeln!(out, "{pad}{}:", field.name)?;
            writeln!(out, "{pad}    type: record")?;
            writeln!(out, "{pad}    fields:")?;
            for child in fields.iter() {
                format_field(child, indent + 8, out)?;
            }
        }
        base => {
            write!(out, "{pad}{}: {{ type: {}", field.name, type_label(base))?;
            if let Some(logical) = &field.logical {
                write!(out, ", logical: {}", logical_label(logical))?;
            }
            writeln!(out, " }}")?;
        }
    }
    Ok(())
}

fn type_label(base: &BaseType) -> String {
    match base {
        BaseType::Fixed(n) => format!("fixed({n})"),
        other => other.type_name().to_string(),
    }
}

fn logical_label(logical: &LogicalType) -> String {
    match logical {
        LogicalType::Decimal { precision, scale } => format!("decimal({precision}, {scale})"),
        other => other.name().to_string(),
    }
}
