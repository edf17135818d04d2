//! Encoded record buffer carrying the identity of its producing schema.

use std::sync::Arc;

use bytes::Bytes;
use recwire_core::Schema;

/// An immutable encoded record plus the identity of the schema used to
/// produce it.
///
/// Created once per encode call and consumed once per decode call; the
/// schema identity lets the decode side reject buffers produced under a
/// different layout instead of misreading bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBuffer {
    schema_name: Arc<str>,
    fingerprint: u64,
    bytes: Bytes,
}

impl EncodedBuffer {
    pub fn new(schema: &Schema, bytes: impl Into<Bytes>) -> Self {
        Self {
            schema_name: Arc::from(schema.name()),
            fingerprint: schema.fingerprint(),
            bytes: bytes.into(),
        }
    }

    /// Reconstitute a buffer whose identity is known out of band, e.g. bytes
    /// received from a transport alongside a schema reference.
    pub fn from_parts(
        schema_name: impl Into<Arc<str>>,
        fingerprint: u64,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            fingerprint,
            bytes: bytes.into(),
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}
