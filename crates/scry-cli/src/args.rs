use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "scry")]
#[command(about = "Query a local document index and render the results for humans", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding the index and config (defaults to SCRY_PATH,
    /// then the platform data dir, then ~/.scry)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a free-text query against the index and render the best match
    Query {
        /// The prompt, e.g. `scry query what is CVE-2021-44228`
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Print every indexed document as pretty JSON
    Docs,

    /// Manage the document index
    Index {
        #[command(subcommand)]
        command: IndexCommand,
    },
}

#[derive(Subcommand)]
pub enum IndexCommand {
    /// Reset the index and repopulate it from the seed corpus
    Rebuild,

    /// Show document count and the derived schema field paths
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
