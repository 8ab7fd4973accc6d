//! Command line argument parsing for the Lexstore CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexstore - a content-addressed string analysis and query engine
#[derive(Parser, Debug, Clone)]
#[command(name = "lexstore")]
#[command(about = "Analyze, store, and query strings by content")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexstoreArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Persist records to this JSON snapshot file
    #[arg(short = 'd', long = "data-file", value_name = "PATH", env = "LEXSTORE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexstoreArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a string and store the resulting record
    Submit(SubmitArgs),

    /// Look up the stored record for a string
    Fetch(FetchArgs),

    /// Delete the stored record for a string
    Remove(RemoveArgs),

    /// List all stored records
    List,

    /// Query stored records with structured filters
    Query(QueryArgs),

    /// Query stored records with a natural-language phrase
    Ask(AskArgs),
}

/// Arguments for submitting a string
#[derive(Parser, Debug, Clone)]
pub struct SubmitArgs {
    /// The string to analyze and store
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for fetching a record
#[derive(Parser, Debug, Clone)]
pub struct FetchArgs {
    /// The string whose record to look up
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for removing a record
#[derive(Parser, Debug, Clone)]
pub struct RemoveArgs {
    /// The string whose record to delete
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for structured queries
#[derive(Parser, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only palindromes (true) or only non-palindromes (false)
    #[arg(long, value_name = "BOOL")]
    pub palindrome: Option<String>,

    /// Minimum length, inclusive
    #[arg(long, value_name = "N")]
    pub min_length: Option<String>,

    /// Maximum length, inclusive
    #[arg(long, value_name = "N")]
    pub max_length: Option<String>,

    /// Exact word count
    #[arg(long, value_name = "N")]
    pub word_count: Option<String>,

    /// Single character the value must contain (case-insensitive)
    #[arg(long, value_name = "CHAR")]
    pub contains_character: Option<String>,

    /// Substring the value must contain (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub value_contains: Option<String>,
}

/// Arguments for natural-language queries
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The query phrase, e.g. "single word palindromes longer than 3"
    #[arg(value_name = "TEXT")]
    pub text: String,
}
