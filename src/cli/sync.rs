//! Sync command: generate a palette and reconcile it into a token store.

use crate::cli::common::{CliError, CliResult, OutputFormat};
use crate::services::{generate_brand_colors, reconcile_palette, CollectionTarget};
use crate::store::TokenStore;
use clap::Args;
use std::path::PathBuf;

/// Generate a palette and write it into a token store collection
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Seed color as 6 hex digits, with optional '#' prefix
    #[arg(value_name = "HEX")]
    pub seed: String,

    /// Path to the token store JSON file (created if missing)
    #[arg(short, long, value_name = "FILE")]
    pub tokens: PathBuf,

    /// Id of an existing target collection
    #[arg(long, value_name = "ID", conflicts_with = "collection_name")]
    pub collection_id: Option<String>,

    /// Name for a new target collection
    #[arg(long, value_name = "NAME")]
    pub collection_name: Option<String>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SyncArgs {
    /// Execute the sync command
    pub fn execute(&self) -> CliResult<()> {
        let target = match (&self.collection_id, &self.collection_name) {
            (Some(id), None) => CollectionTarget::Existing(id.clone()),
            (None, Some(name)) => CollectionTarget::New(name.clone()),
            _ => {
                return Err(CliError::validation(
                    "Specify exactly one of --collection-id or --collection-name",
                ))
            }
        };

        let palette = generate_brand_colors(&self.seed)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let mut store = TokenStore::load(&self.tokens)
            .map_err(|e| CliError::io(format!("Failed to load token store: {e}")))?;

        let report = reconcile_palette(&mut store, &palette, &target)
            .map_err(|e| CliError::io(format!("Reconciliation failed: {e}")))?;

        store
            .save(&self.tokens)
            .map_err(|e| CliError::io(format!("Failed to save token store: {e}")))?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize report: {e}")))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                if let Some(name) = &report.collection_name {
                    println!("✓ Created collection '{name}'");
                }
                println!(
                    "✓ Synced palette for {}: {} created, {} updated",
                    self.seed,
                    report.created.len(),
                    report.updated.len()
                );
                for outcome in report.created.iter().chain(&report.updated) {
                    println!("  {}  {}", outcome.name, outcome.color);
                }
            }
        }

        Ok(())
    }
}
