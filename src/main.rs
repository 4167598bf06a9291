//! Command-line entry point.
//!
//! Prints the generated configuration to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ffdns_genconfig::config::DEFAULT_SOURCE_DIR;
use ffdns_genconfig::{AddressFamily, ConfigFormat, ConfigGenerator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "ffdns-genconfig", version)]
#[command(about = "Generate dnsmasq or BIND forwarding config from per-domain DNS server lists")]
struct Cli {
    /// Create config in format FMT
    #[arg(short = 'f', long = "format", value_name = "FMT", value_enum, default_value_t)]
    format: ConfigFormat,

    /// Use files in DIR as input files
    #[arg(short = 's', long = "sourcedir", value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Exclude the comma-separated list of FILES in the sourcedir from the generation
    #[arg(short = 'x', long, value_name = "FILES", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Only include servers of one address family
    #[arg(long, value_enum)]
    filter: Option<AddressFamily>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = GeneratorConfig::new(&cli.source_dir)
        .with_format(cli.format)
        .with_exclude(cli.exclude);
    if let Some(family) = cli.filter {
        tracing::info!(filter = %family, "Keeping only servers of one address family");
        config = config.with_filter(family);
    }

    let output = ConfigGenerator::new(config)
        .generate()
        .with_context(|| format!("failed to generate config from {}", cli.source_dir.display()))?;
    println!("{output}");
    Ok(())
}
