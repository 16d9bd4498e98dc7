use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "elementos",
    version,
    about = "Scoring and classification engine for the Quiz dos 5 Elementos"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file overriding catalog variant and thresholds
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Validate(ValidateCommand),
    Questions(QuestionsCommand),
    Dimensions(DimensionsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CatalogVariant {
    Full,
    Compact,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file with the submitted answers
    pub answers: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Catalog variant; beats the config file's choice
    #[arg(long, value_enum)]
    pub variant: Option<CatalogVariant>,

    /// Also write the result envelope to disk
    #[arg(long)]
    pub export: bool,

    #[arg(long, default_value = "resultados")]
    pub export_dir: PathBuf,
}

#[derive(Args)]
pub struct ValidateCommand {
    /// JSON file with the submitted answers
    pub answers: PathBuf,

    #[arg(long, value_enum)]
    pub variant: Option<CatalogVariant>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(long, value_enum)]
    pub variant: Option<CatalogVariant>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct DimensionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
