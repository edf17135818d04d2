use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use recwire::schema_json::parse_schema;

#[derive(Args)]
pub struct SchemaArgs {
    /// Path to the JSON schema document
    schema: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let text = fs::read_to_string(&self.schema)
            .with_context(|| format!("failed to read {}", self.schema.display()))?;
        let schema = parse_schema(&text)?;

        let rendered = format!(
            "{} (fingerprint {:016x})\n{}",
            schema.name(),
            schema.fingerprint(),
            schema.fields()
        );
        match self.output {
            Some(path) => fs::write(path, rendered)?,
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
