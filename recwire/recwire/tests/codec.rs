use recwire::{
    BaseType, DecodeError, EncodeError, EncodedBuffer, Field, OpenRecord, Registry, Schema, Value,
    decode, encode,
};

fn schema(fields: Vec<Field>) -> Schema {
    Schema::new("Test", fields).expect("schema should validate")
}

#[test]
fn writes_fields_in_schema_order_big_endian() {
    let schema = schema(vec![
        Field::new("a", BaseType::Int32),
        Field::new("b", BaseType::Str),
        Field::new("c", BaseType::Int64),
    ]);
    let record = OpenRecord::new()
        .with("b", Value::string("hi"))
        .with("c", Value::Int64(2))
        .with("a", Value::Int32(1));

    let buffer = encode(&schema, &record, &Registry::default()).expect("encode should succeed");
    assert_eq!(
        buffer.as_bytes(),
        [
            0, 0, 0, 1, // a
            0, 0, 0, 2, b'h', b'i', // b
            0, 0, 0, 0, 0, 0, 0, 2, // c
        ]
    );
}

#[test]
fn length_prefixes_bytes_fields() {
    let schema = schema(vec![Field::new("blob", BaseType::Bytes)]);
    let record = OpenRecord::new().with("blob", Value::bytes([0xAB, 0xCD]));

    let buffer = encode(&schema, &record, &Registry::default()).expect("encode should succeed");
    assert_eq!(buffer.as_bytes(), [0, 0, 0, 2, 0xAB, 0xCD]);
}

#[test]
fn fixed_fields_carry_no_prefix() {
    let schema = schema(vec![Field::new("tag", BaseType::Fixed(4))]);
    let record = OpenRecord::new().with("tag", Value::bytes([1, 2, 3, 4]));

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");
    assert_eq!(buffer.as_bytes(), [1, 2, 3, 4]);

    let decoded = decode(&schema, &buffer, &registry).expect("decode should succeed");
    assert_eq!(decoded.get("tag"), Some(&Value::bytes([1, 2, 3, 4])));
}

#[test]
fn fails_on_fixed_length_mismatch() {
    let schema = schema(vec![Field::new("tag", BaseType::Fixed(4))]);
    let record = OpenRecord::new().with("tag", Value::bytes([1, 2, 3]));

    let err = encode(&schema, &record, &Registry::default()).expect_err("encode should fail");
    assert!(matches!(
        err,
        EncodeError::FixedSizeMismatch {
            expected: 4,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn missing_field_without_default_fails() {
    let schema = schema(vec![Field::new("id", BaseType::Int32)]);
    let err = encode(&schema, &OpenRecord::new(), &Registry::default())
        .expect_err("encode should fail");
    assert!(matches!(err, EncodeError::MissingField { field } if field == "id"));
}

#[test]
fn missing_field_uses_declared_default() {
    let schema = schema(vec![
        Field::new("id", BaseType::Int32),
        Field::new("note", BaseType::Str).with_default(Value::string("n/a")),
    ]);
    let record = OpenRecord::new().with("id", Value::Int32(7));

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");
    let decoded = decode(&schema, &buffer, &registry).expect("decode should succeed");
    assert_eq!(decoded.get("note"), Some(&Value::string("n/a")));
}

#[test]
fn nested_records_round_trip() {
    let address = BaseType::Record(
        vec![
            Field::new("street", BaseType::Str),
            Field::new("zip", BaseType::Int32),
        ]
        .into(),
    );
    let schema = schema(vec![
        Field::new("name", BaseType::Str),
        Field::new("address", address),
    ]);
    let record = OpenRecord::new()
        .with("name", Value::string("Jane"))
        .with(
            "address",
            Value::Record(vec![
                ("street".to_string(), Value::string("Main St 1")),
                ("zip".to_string(), Value::Int32(12345)),
            ]),
        );

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");
    let decoded = decode(&schema, &buffer, &registry).expect("decode should succeed");

    let Some(Value::Record(pairs)) = decoded.get("address") else {
        panic!("expected nested record");
    };
    assert_eq!(pairs[0].1, Value::string("Main St 1"));
    assert_eq!(pairs[1].1, Value::Int32(12345));
}

#[test]
fn type_mismatch_names_the_field() {
    let schema = schema(vec![Field::new("id", BaseType::Int32)]);
    let record = OpenRecord::new().with("id", Value::string("seven"));

    let err = encode(&schema, &record, &Registry::default()).expect_err("encode should fail");
    assert!(matches!(err, EncodeError::TypeMismatch { field, .. } if field == "id"));
}

#[test]
fn fails_on_truncated_buffer() {
    let schema = schema(vec![
        Field::new("a", BaseType::Int32),
        Field::new("b", BaseType::Int64),
    ]);
    let record = OpenRecord::new()
        .with("a", Value::Int32(1))
        .with("b", Value::Int64(2));

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");

    // Drop the last field's bytes.
    let cut = EncodedBuffer::from_parts(
        buffer.schema_name().to_string(),
        buffer.fingerprint(),
        buffer.as_bytes()[..4].to_vec(),
    );
    let err = decode(&schema, &cut, &registry).expect_err("decode should fail");
    assert!(matches!(err, DecodeError::Truncated { field } if field == "b"));
}

#[test]
fn fails_on_trailing_bytes() {
    let schema = schema(vec![Field::new("a", BaseType::Int32)]);
    let record = OpenRecord::new().with("a", Value::Int32(1));

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");

    let mut padded = buffer.as_bytes().to_vec();
    padded.extend_from_slice(&[0xDE, 0xAD]);
    let padded =
        EncodedBuffer::from_parts(buffer.schema_name().to_string(), buffer.fingerprint(), padded);

    let err = decode(&schema, &padded, &registry).expect_err("decode should fail");
    assert!(matches!(err, DecodeError::TrailingBytes { remaining: 2 }));
}

#[test]
fn rejects_buffer_from_another_schema() {
    let first = schema(vec![Field::new("a", BaseType::Int32)]);
    let other = Schema::new("Other", vec![Field::new("a", BaseType::Int32)])
        .expect("schema should validate");
    let record = OpenRecord::new().with("a", Value::Int32(1));

    let registry = Registry::default();
    let buffer = encode(&other, &record, &registry).expect("encode should succeed");
    let err = decode(&first, &buffer, &registry).expect_err("decode should fail");
    assert!(matches!(
        err,
        DecodeError::SchemaMismatch { expected, actual }
            if expected == "Test" && actual == "Other"
    ));
}

#[test]
fn fails_on_invalid_utf8_in_string_field() {
    let schema = schema(vec![Field::new("s", BaseType::Str)]);
    let raw = vec![0, 0, 0, 2, 0xFF, 0xFE];
    let buffer = EncodedBuffer::from_parts("Test", schema.fingerprint(), raw);

    let err = decode(&schema, &buffer, &Registry::default()).expect_err("decode should fail");
    assert!(matches!(err, DecodeError::InvalidUtf8 { field, .. } if field == "s"));
}

#[test]
fn buffer_identity_round_trips_through_parts() {
    let schema = schema(vec![Field::new("a", BaseType::Int32)]);
    let record = OpenRecord::new().with("a", Value::Int32(5));

    let registry = Registry::default();
    let buffer = encode(&schema, &record, &registry).expect("encode should succeed");
    let rebuilt = EncodedBuffer::from_parts(
        buffer.schema_name().to_string(),
        buffer.fingerprint(),
        buffer.as_bytes().to_vec(),
    );
    assert_eq!(rebuilt, buffer);

    let decoded = decode(&schema, &rebuilt, &registry).expect("decode should succeed");
    assert_eq!(decoded.get("a"), Some(&Value::Int32(5)));
}
