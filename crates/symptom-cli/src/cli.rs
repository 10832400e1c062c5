//! CLI argument definitions for the symptom identifier.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use symptom_match::{IndelRatio, JaroWinkler, Similarity};

#[derive(Parser)]
#[command(
    name = "symptom-id",
    version,
    about = "Rule-based disease identification from a list of symptoms",
    long_about = "Suggest candidate conditions for a comma-separated list of symptoms.\n\n\
                  Symptoms are matched exactly and approximately against a JSON\n\
                  disease catalog. Results are suggestions, not a diagnosis.\n\
                  Without a subcommand an interactive shell is started."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Disease catalog file (default: $SYMPTOM_DB_PATH or ./diseases.json).
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// String similarity used for approximate symptom matches.
    #[arg(long = "similarity", value_enum, default_value = "indel", global = true)]
    pub similarity: SimilarityArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow symptom text to appear in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank diseases for the given symptoms and exit.
    #[command(short_flag = 'i', long_flag = "identify")]
    Identify(IdentifyArgs),

    /// List disease names in alphabetical order.
    List(ListArgs),

    /// Show one disease record.
    Show(ShowArgs),

    /// Add a disease to the catalog.
    Add(AddArgs),

    /// Start the interactive shell (default).
    Shell(ShellArgs),
}

#[derive(Parser)]
pub struct IdentifyArgs {
    /// Symptoms, separated by commas or semicolons. Prompted for when omitted.
    #[arg(value_name = "SYMPTOMS")]
    pub symptoms: Vec<String>,

    /// Maximum number of results.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Minimum confidence (0.0 to 1.0) for a result to be shown.
    #[arg(long = "min-confidence", value_name = "RATIO", default_value_t = 0.05)]
    pub min_confidence: f64,

    /// Print the per-symptom score breakdown under each result.
    #[arg(long = "explain")]
    pub explain: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Show symptoms and descriptions in a table.
    #[arg(long = "long", short = 'l')]
    pub long: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Disease name (case-sensitive). Multiple words are joined with spaces.
    #[arg(value_name = "NAME", required = true)]
    pub name: Vec<String>,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Disease name; must not already exist.
    #[arg(long = "name")]
    pub name: String,

    /// Comma-separated symptoms.
    #[arg(long = "symptoms")]
    pub symptoms: String,

    /// Short description.
    #[arg(long = "description", default_value = "")]
    pub description: String,

    /// Common treatment or advice.
    #[arg(long = "treatment", default_value = "")]
    pub treatment: String,
}

#[derive(Parser)]
pub struct ShellArgs {
    /// Maximum number of results per query.
    #[arg(long = "top", value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Minimum confidence (0.0 to 1.0) for a result to be shown.
    #[arg(long = "min-confidence", value_name = "RATIO", default_value_t = 0.05)]
    pub min_confidence: f64,
}

/// CLI similarity choices.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SimilarityArg {
    /// Indel ratio, 2*M/T over the longest common subsequence.
    #[default]
    Indel,
    /// Jaro-Winkler similarity.
    JaroWinkler,
}

impl Similarity for SimilarityArg {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        match self {
            Self::Indel => IndelRatio.ratio(a, b),
            Self::JaroWinkler => JaroWinkler.ratio(a, b),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
