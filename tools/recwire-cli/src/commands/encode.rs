use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use recwire::{Registry, encode, schema_json::parse_schema};

use crate::json::record_from_json;

#[derive(Args)]
pub struct EncodeArgs {
    /// Path to the JSON schema document
    schema: PathBuf,

    /// Path to the JSON record to encode
    record: PathBuf,

    /// Output file path (hex on stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable logical-type conversion; values must be wire-native
    #[arg(long)]
    raw: bool,
}

impl EncodeArgs {
    pub fn run(self) -> Result<()> {
        let schema_text = fs::read_to_string(&self.schema)
            .with_context(|| format!("failed to read {}", self.schema.display()))?;
        let schema = parse_schema(&schema_text)?;

        let record_text = fs::read_to_string(&self.record)
            .with_context(|| format!("failed to read {}", self.record.display()))?;
        let doc = serde_json::from_str(&record_text)
            .with_context(|| format!("failed to parse {}", self.record.display()))?;
        let record = record_from_json(&schema, &doc)?;

        let registry = Registry::with_conversion(!self.raw);
        let buffer = encode(&schema, &record, &registry)?;

        match self.output {
            Some(path) => fs::write(path, buffer.as_bytes())?,
            None => {
                let hex: String = buffer
                    .as_bytes()
                    .iter()
                    .map(|b| format!("{b:02x}"))
                    .collect();
                println!("{hex}");
            }
        }
        Ok(())
    }
}
