use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "benchtop")]
#[command(version)]
#[command(about = "A terminal calculator and image gallery", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the calculator (default)
    Calc {
        /// Feed these key presses instead of opening the interactive UI.
        /// `c` clears and `<` deletes, e.g. "12.5*4=".
        #[arg(short, long)]
        keys: Option<String>,

        /// Output format for non-interactive mode
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "keys")]
        output_format: OutputFormat,
    },
    /// Browse the image gallery
    Gallery {
        /// Gallery manifest (overrides the configured one)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Initial category filter
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Print the visible items instead of opening the interactive UI
        #[arg(short, long)]
        list: bool,

        /// Output format for non-interactive mode
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "list")]
        output_format: OutputFormat,
    },
    /// Initialize configuration
    Init,
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
}
