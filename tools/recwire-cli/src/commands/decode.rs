use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use recwire::{EncodedBuffer, Registry, decode, schema_json::parse_schema};

use crate::json::record_to_json;

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to the JSON schema document
    schema: PathBuf,

    /// Path to the encoded payload
    payload: PathBuf,

    /// Disable logical-type conversion; output carries wire-native values
    #[arg(long)]
    raw: bool,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let schema_text = fs::read_to_string(&self.schema)
            .with_context(|| format!("failed to read {}", self.schema.display()))?;
        let schema = parse_schema(&schema_text)?;

        let payload = fs::read(&self.payload)
            .with_context(|| format!("failed to read {}", self.payload.display()))?;
        // The file carries bare wire bytes; the schema supplied here asserts
        // their identity.
        let buffer = EncodedBuffer::from_parts(schema.name(), schema.fingerprint(), payload);

        let registry = Registry::with_conversion(!self.raw);
        let record = decode(&schema, &buffer, &registry)?;

        let doc = record_to_json(&schema, &record);
        println!("{}", serde_json::to_string_pretty(&doc)?);
        Ok(())
    }
}
