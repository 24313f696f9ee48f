use crate::types::model::ScoreValue;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maturity",
    version,
    about = "Maturity assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors; command output is still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding persisted scores
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in maturity models
    Models,
    /// Show per-section and overall scores
    Summary(SummaryCommand),
    /// Set the score of one item
    Score(ScoreCommandArgs),
    /// Show an item with its success criteria
    Show(ShowCommand),
    /// Search items by label or section title
    Search(SearchCommand),
    /// Clear every score of a model
    Reset(ResetCommand),
    /// Write scores to a JSON file
    Export(ExportCommand),
    /// Replace scores with the contents of a JSON file
    Import(ImportCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Built-in model key (see `maturity models`)
    #[arg(short, long, conflicts_with = "model_file")]
    pub model: Option<String>,

    /// Custom model definition (.toml or .json)
    #[arg(long)]
    pub model_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct SummaryCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommandArgs {
    #[command(flatten)]
    pub model: ModelArgs,
    pub item: String,
    /// 0, 1, 2 or not-started, partial, complete
    pub value: ScoreValue,
}

#[derive(Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    pub item: String,
}

#[derive(Args)]
pub struct SearchCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    pub query: String,
}

#[derive(Args)]
pub struct ResetCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    /// Confirm that all scores should be deleted
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportCommand {
    #[command(flatten)]
    pub model: ModelArgs,
    pub file: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
