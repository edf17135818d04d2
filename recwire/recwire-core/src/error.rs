//! Error types shared by the schema, converter, and codec layers.

/// Error rejected at [`Schema`](crate::Schema) construction or field lookup.
///
/// Schema problems are always surfaced here, never at encode time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// Two fields in the same record share a name.
    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String },

    /// A logical type was declared on a base type it cannot annotate
    /// (decimal needs bytes/fixed, date needs int32, timestamp-millis needs int64).
    #[error("logical type '{logical}' is not valid on base type '{base}' (field '{field}')")]
    IncompatibleLogicalType {
        field: String,
        logical: &'static str,
        base: &'static str,
    },

    /// Decimal contract out of bounds: precision must be >= 1 and scale <= precision.
    #[error("invalid decimal contract on field '{field}': precision {precision}, scale {scale}")]
    InvalidDecimal {
        field: String,
        precision: u32,
        scale: u32,
    },

    /// A fixed-length bytes field was declared with size zero.
    #[error("fixed field '{field}' must have a non-zero size")]
    InvalidFixedSize { field: String },

    /// Field lookup by name failed.
    #[error("field '{name}' not found in schema '{schema}'")]
    UnknownField { schema: String, name: String },
}

/// A [`Value`](crate::Value) accessor found a different variant than requested.
#[derive(Debug, Clone, thiserror::Error)]
#[error("expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}

/// Error returned by `encode` and the encode half of a converter.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// An open record omitted a field that has no declared default.
    #[error("missing value for field '{field}' and no default is declared")]
    MissingField { field: String },

    /// The decimal's required precision exceeds the schema's declared precision.
    ///
    /// The check is on required digits, not magnitude: this fails even when the
    /// unscaled integer would fit the wire bytes.
    #[error(
        "cannot encode decimal with precision {required} as max precision {declared} (field '{field}')"
    )]
    PrecisionExceeded {
        field: String,
        required: u32,
        declared: u32,
    },

    /// The decimal's scale does not match the schema's declared scale exactly.
    #[error(
        "decimal scale {value_scale} does not match declared scale {declared_scale} (field '{field}')"
    )]
    ScaleMismatch {
        field: String,
        value_scale: u32,
        declared_scale: u32,
    },

    /// The decimal's unscaled integer needs more bytes than the fixed field holds.
    #[error("decimal needs {needed} bytes but fixed field '{field}' holds {size}")]
    DecimalOverflowsFixed {
        field: String,
        needed: usize,
        size: usize,
    },

    /// A raw byte value for a fixed field has the wrong length.
    #[error("fixed field '{field}' expects {expected} bytes, got {actual}")]
    FixedSizeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A string or bytes value is too long for the u32 length prefix.
    #[error("field '{field}' length {len} exceeds the length-prefix limit")]
    Oversized { field: String, len: usize },

    /// The supplied value's variant does not match the field's type.
    #[error("field '{field}': {source}")]
    TypeMismatch {
        field: String,
        #[source]
        source: ValueTypeError,
    },
}

/// Error returned by `decode` and the decode half of a converter.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The buffer was produced under a different schema than the one supplied.
    #[error("buffer was encoded with schema '{actual}', not '{expected}'")]
    SchemaMismatch { expected: String, actual: String },

    /// The buffer ran out of bytes before the last field was read.
    #[error("buffer exhausted while reading field '{field}'")]
    Truncated { field: String },

    /// Bytes remained after the last schema field was read (strict framing).
    #[error("{remaining} trailing bytes after the last field")]
    TrailingBytes { remaining: usize },

    /// A byte span is inconsistent with the field's declaration.
    #[error("malformed bytes in field '{field}': {detail}")]
    MalformedBytes { field: String, detail: String },

    /// A string field did not contain valid UTF-8.
    #[error("invalid UTF-8 in field '{field}'")]
    InvalidUtf8 {
        field: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A converter received a wire value of an unexpected variant.
    #[error("field '{field}': {source}")]
    TypeMismatch {
        field: String,
        #[source]
        source: ValueTypeError,
    },
}
