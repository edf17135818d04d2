//! Error type for the JSON schema source.

use recwire_core::SchemaError;

/// Error produced while turning a JSON document into a `Schema`.
#[derive(Debug, thiserror::Error)]
pub enum SchemaJsonError {
    /// The document is not valid JSON.
    #[error("failed to parse schema document: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but not a valid schema description.
    #[error("invalid schema document: {detail}")]
    Invalid { detail: String },

    /// The described schema failed construction-time validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
