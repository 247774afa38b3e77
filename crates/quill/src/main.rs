//! Quill CLI - static site builder.
//!
//! Provides commands for:
//! - `build`: Render markdown pages and blog posts into a static site

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::BuildArgs;
use output::Output;

/// Log level used when neither `--verbose` nor `RUST_LOG` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Quill - static site builder.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(verbose, rust_log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error building site: {err}"));
        std::process::exit(1);
    }
}

/// Log filter for the subscriber.
///
/// `--verbose` enables INFO, otherwise `RUST_LOG` applies. Without a usable
/// `RUST_LOG` only warnings and errors are shown.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "quill",
            "build",
            "--config",
            "site/quill.toml",
            "--output-dir",
            "dist",
            "--verbose",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Build(ref args) if args.verbose));
    }

    #[test]
    fn test_build_requires_subcommand() {
        assert!(Cli::try_parse_from(["quill"]).is_err());
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
    }

    #[test]
    fn test_log_filter_verbose_overrides_rust_log() {
        assert_eq!(log_filter(true, Some("debug")).to_string(), "info");
    }

    #[test]
    fn test_log_filter_uses_rust_log() {
        assert_eq!(log_filter(false, Some("debug")).to_string(), "debug");
    }

    #[test]
    fn test_log_filter_invalid_rust_log_falls_back() {
        assert_eq!(log_filter(false, Some("quill=verbose")).to_string(), "warn");
    }
}
