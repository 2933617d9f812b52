//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// valeside - Vale prose linting from the command line and the editor
#[derive(Parser)]
#[command(name = "valeside")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint a file
    Lint {
        /// File to lint
        file: PathBuf,

        /// Line of the caret (1-based); selects the paragraph linted in
        /// files above the line threshold
        #[arg(long, value_name = "LINE")]
        caret: Option<usize>,

        /// Lint as if the file had just been opened
        #[arg(long)]
        from_load: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Start the LSP server
    Lsp,

    /// Print a rule template for an extension point
    NewRule {
        /// Extension point (existence, substitution, ...)
        point: String,
    },

    /// List installed styles, or the rules of one style
    Styles {
        /// Style whose rule files are listed
        style: Option<String>,

        /// Directory Vale reads its configuration from
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Initialize settings
    Init {
        /// Force overwrite existing settings
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
