use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sleepdash")]
#[command(about = "Sleep-health survey analytics with a terminal dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute metrics and chart series over a survey CSV and print a report
    Report {
        /// Path to the survey CSV
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Restrict to these sleep disorders (labels, comma-separated)
        #[arg(long = "disorders", value_delimiter = ',')]
        disorders: Option<Vec<String>>,

        /// Config file (defaults to sleepdash.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Open the interactive dashboard
    Dash {
        /// Path to the survey CSV
        path: PathBuf,

        /// Initial disorder selection (labels, comma-separated)
        #[arg(long = "disorders", value_delimiter = ',')]
        disorders: Option<Vec<String>>,

        /// Config file (defaults to sleepdash.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default sleepdash.toml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
        }
    }
}
