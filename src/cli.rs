use std::path::PathBuf;

use apollo::config::ColorMode;
use apollo::BuildMode;
use clap::{ArgGroup, Parser, Subcommand};

/// Apollo - package, validate and publish a Python distribution
#[derive(Parser, Debug)]
#[command(name = "apollo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Disable spinners
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Log internal decisions to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/apollo/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the package and push it to TestPyPI or PyPI
    #[command(group(ArgGroup::new("target").required(true).args(["test", "prod"])))]
    Deploy {
        /// Push to TestPyPI
        #[arg(long)]
        test: bool,

        /// Push to PyPI
        #[arg(long)]
        prod: bool,

        /// Skip `twine check` before uploading
        #[arg(long)]
        skip_sanity_check: bool,

        /// Pass --verbose to the upload command
        #[arg(long)]
        verbose: bool,

        /// Value exported as ENV to the clean and build commands
        #[arg(long, value_enum, default_value_t = BuildMode::Production)]
        build_mode: BuildMode,
    },
}
