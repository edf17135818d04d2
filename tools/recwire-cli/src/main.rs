mod commands;
mod json;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{decode::DecodeArgs, encode::EncodeArgs, schema::SchemaArgs};

#[derive(Parser)]
#[command(name = "recwire", about = "Encode and decode schema-governed binary records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema document and print the validated layout
    Schema(SchemaArgs),
    /// Encode a JSON record into wire bytes
    Encode(EncodeArgs),
    /// Decode wire bytes back into a JSON record
    Decode(DecodeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Encode(args) => args.run(),
        Commands::Decode(args) => args.run(),
    }
}
