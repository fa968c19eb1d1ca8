//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::demo;
use super::output::{Output, OutputFormat};
use crate::config::Config;
use crate::domain::{Shape, ShapeManager};

#[derive(Parser)]
#[command(name = "shapes")]
#[command(author, version, about = "Builds shapes with creational patterns and lists them")]
pub struct Cli {
    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose);

    output.verbose_ctx("config", &format!("Using {:?} output", format));

    let mut manager = ShapeManager::instance()
        .lock()
        .map_err(|_| anyhow::anyhow!("Shape registry lock poisoned"))?;

    demo::populate(&mut manager, &output);

    if output.is_json() {
        let shapes: Vec<&Shape> = manager.shapes().iter().map(|s| s.as_ref()).collect();
        output.data(&shapes).context("Failed to write shapes")?;
    } else {
        manager
            .write_shapes(&mut io::stdout().lock())
            .context("Failed to write shapes")?;
    }

    output.verbose("Listed all shapes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["shapes"]).unwrap();
        assert!(cli.format.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["shapes", "-f", "json", "-v", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["shapes", "--format", "xml"]).is_err());
    }
}
