//! Generate command: derive the 9-shade palette from a seed color.

use crate::cli::common::{CliError, CliResult, OutputFormat};
use crate::services::generate_brand_colors;
use clap::Args;

/// Generate a brand palette from a seed hex color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Seed color as 6 hex digits, with optional '#' prefix
    #[arg(value_name = "HEX")]
    pub seed: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let palette = generate_brand_colors(&self.seed)
            .map_err(|e| CliError::validation(e.to_string()))?;

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&palette)
                    .map_err(|e| CliError::io(format!("Failed to serialize palette: {e}")))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                println!("Palette for seed {}", self.seed);
                println!();
                for entry in &palette {
                    let c = entry.color;
                    println!(
                        "  {:>3}  {}  rgb({:.4}, {:.4}, {:.4})",
                        entry.shade.label(),
                        c.to_hex(),
                        c.r,
                        c.g,
                        c.b
                    );
                }
            }
        }

        Ok(())
    }
}
