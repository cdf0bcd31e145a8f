//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use legl_fields_domain::BlankFields;
use std::path::PathBuf;

/// legl-fields: derive key, tag, URL and date fields from legal-register records
#[derive(Parser, Debug)]
#[command(name = "legl-fields")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run derivers over exported records
    Derive(DeriveArgs),

    /// Tag ad-hoc text with rule tables
    Classify(ClassifyArgs),

    /// List built-in derivers
    Derivers(DeriversArgs),

    /// Configuration management
    Config(ConfigArgs),
}

/// Blank locator handling for UK keys
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BlankFieldsArg {
    Skip,
    Positional,
}

impl From<BlankFieldsArg> for BlankFields {
    fn from(arg: BlankFieldsArg) -> Self {
        match arg {
            BlankFieldsArg::Skip => BlankFields::Skip,
            BlankFieldsArg::Positional => BlankFields::Positional,
        }
    }
}

#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Records file (.json array, host export, or .jsonl; use - for stdin)
    #[arg(long)]
    pub records: Option<PathBuf>,

    /// Deriver to run; repeat for several (default: config, then all)
    #[arg(long = "deriver", value_name = "NAME")]
    pub derivers: Vec<String>,

    /// Also append derived values to a JSON Lines file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// How blank locators shape UK keys
    #[arg(long, value_enum)]
    pub blank_fields: Option<BlankFieldsArg>,

    /// Fail on unknown URL variant selectors instead of emitting empty values
    #[arg(long)]
    pub reject_unrecognized: bool,

    /// Directory of custom TOML rule tables to run as extra fields
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing text to classify (use - for stdin)
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Table to run; repeat for several (default: all)
    #[arg(long = "table", value_name = "NAME")]
    pub tables: Vec<String>,

    /// Directory of custom TOML rule tables
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeriversArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./legl-fields.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}
