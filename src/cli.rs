use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "s-core",
    version,
    about = "Youth soccer performance scoring and coaching report CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./s-core.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a measurement file and classify the athlete
    Score(ScoreCommand),
    /// Build the full coaching report for a measurement file
    Analyze(AnalyzeCommand),
    /// Load the config and reference tables and report problems
    Check,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// JSON narrative whose comments override the local diagnostic text
    #[arg(long)]
    pub narrative: Option<PathBuf>,
    /// Seed for quote selection and athlete id generation
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
