use recwire_core::{BaseType, Field, LogicalType, Schema, SchemaError, Value};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::Str(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn value_accessors_reject_other_variants() {
    let value = Value::Int32(7);
    assert_eq!(value.try_i32().expect("should be i32"), 7);
    let err = value.try_str().expect_err("should not be a string");
    assert_eq!(err.actual, "Int32");
}

#[test]
fn field_new_sets_all_fields() {
    let field = Field::new("count", BaseType::Int64);
    assert_eq!(field.name, "count");
    assert!(matches!(field.base, BaseType::Int64));
    assert!(field.logical().is_none());
    assert!(field.default.is_none());
}

#[test]
fn field_with_logical_carries_annotation() {
    let field = Field::with_logical(
        "balance",
        BaseType::Bytes,
        LogicalType::Decimal {
            precision: 4,
            scale: 2,
        },
    );
    assert!(matches!(
        field.logical(),
        Some(LogicalType::Decimal {
            precision: 4,
            scale: 2
        })
    ));
}

#[test]
fn schema_resolves_fields_by_name() {
    let schema = Schema::new(
        "Customer",
        vec![
            Field::new("id", BaseType::Int32),
            Field::new("name", BaseType::Str),
        ],
    )
    .expect("schema should validate");

    let field = schema.field("name").expect("field should resolve");
    assert!(matches!(field.base, BaseType::Str));

    let err = schema.field("missing").expect_err("lookup should fail");
    assert!(matches!(err, SchemaError::UnknownField { name, .. } if name == "missing"));
}

#[test]
fn fingerprint_distinguishes_layouts() {
    let a = Schema::new("A", vec![Field::new("x", BaseType::Int32)]).expect("schema");
    let b = Schema::new("A", vec![Field::new("x", BaseType::Int64)]).expect("schema");
    assert_ne!(a.fingerprint(), b.fingerprint());

    let a2 = Schema::new("A", vec![Field::new("x", BaseType::Int32)]).expect("schema");
    assert_eq!(a.fingerprint(), a2.fingerprint());
}
