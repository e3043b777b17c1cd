//! Brandtone - Brand color palette generator
//!
//! This application derives a 9-step tonal palette from a seed color and
//! can sync the result into a design token collection file.

use brandtone::cli::{CollectionsArgs, GenerateArgs, SyncArgs};
use brandtone::constants::APP_BINARY_NAME;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Brandtone - Brand color palette generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a brand palette from a seed hex color
    Generate(GenerateArgs),
    /// List variable collections in a token store file
    Collections(CollectionsArgs),
    /// Generate a palette and write it into a token store collection
    Sync(SyncArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => args.execute(),
        Command::Collections(args) => args.execute(),
        Command::Sync(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name_matches_binary_constant() {
        assert_eq!(Cli::command().get_name(), APP_BINARY_NAME);
    }
}
