//! Collections command: list variable collections in a token store file.

use crate::cli::common::{CliError, CliResult, OutputFormat};
use crate::constants::APP_BINARY_NAME;
use crate::store::{TokenStore, VariableStore};
use clap::Args;
use std::path::PathBuf;

/// List variable collections in a token store file
#[derive(Debug, Clone, Args)]
pub struct CollectionsArgs {
    /// Path to the token store JSON file
    #[arg(short, long, value_name = "FILE")]
    pub tokens: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CollectionsArgs {
    /// Execute the collections command
    pub fn execute(&self) -> CliResult<()> {
        let store = TokenStore::load(&self.tokens)
            .map_err(|e| CliError::io(format!("Failed to load token store: {e}")))?;
        let collections = store
            .list_collections()
            .map_err(|e| CliError::io(format!("Failed to list collections: {e}")))?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&collections)
                    .map_err(|e| CliError::io(format!("Failed to serialize collections: {e}")))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                if collections.is_empty() {
                    println!("No collections in {}", self.tokens.display());
                    println!();
                    println!("To create one, run:");
                    println!(
                        "  {} sync <HEX> --tokens {} --collection-name <NAME>",
                        APP_BINARY_NAME,
                        self.tokens.display()
                    );
                    return Ok(());
                }
                println!("Collections in {}:", self.tokens.display());
                println!();
                for collection in &collections {
                    println!(
                        "  {}  ({} mode{})  {}",
                        collection.name,
                        collection.mode_count,
                        if collection.mode_count == 1 { "" } else { "s" },
                        collection.id
                    );
                }
            }
        }

        Ok(())
    }
}
