use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convpreset")]
#[command(about = "Create and check audio conversion presets", long_about = None)]
pub struct Cli {
    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a new preset document as JSON
    New {
        /// Preset name (defaults to the configured name)
        #[arg(long)]
        name: Option<String>,

        /// Output format symbol, e.g. Mp3 or Ogg (defaults to config)
        #[arg(long)]
        format: Option<String>,

        /// Accepted input extension; repeat for several
        #[arg(long = "input", value_name = "EXT")]
        inputs: Vec<String>,

        /// Setting as KEY=VALUE; irrelevant keys are ignored
        #[arg(long = "set", value_name = "KEY=VALUE")]
        settings: Vec<String>,
    },

    /// Load a preset document, show its settings and validation result
    Check {
        /// Document path, or "-" for stdin
        file: PathBuf,

        /// Other preset names known to the host, for duplicate detection
        #[arg(long = "sibling", value_name = "NAME")]
        siblings: Vec<String>,
    },

    /// List output formats with their relevant settings and defaults
    Formats,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
