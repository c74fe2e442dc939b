use crate::demo::{run_demo, DemoArgs};
use crate::infra::{read_json_file, write_json};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pharma_intel::error::AppError;
use pharma_intel::workflows::scoring::{ContentArtifact, ScoringEngine};
use pharma_intel::workflows::submissions::{IntelligenceReport, ResearchSubmission};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Pharma Intelligence Engine",
    about = "Normalize trial and label intelligence and score GEO content from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Build the intelligence summary and SEO strategy for a submission file
    Summarize(SummarizeArgs),
    /// Score a content artifact against a submission's intelligence
    Score(ScoreArgs),
    /// Run the built-in sample dataset through the full pipeline
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct SummarizeArgs {
    /// Submission JSON: `context` plus raw `trials`, `labels`, `adverse_events`, `competitors`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Submission JSON the artifact was generated from
    #[arg(long)]
    pub(crate) submission: PathBuf,
    /// Content artifact JSON to score
    #[arg(long)]
    pub(crate) artifact: PathBuf,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Summarize(args) => run_summarize(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_summarize(args: SummarizeArgs) -> Result<(), AppError> {
    let submission: ResearchSubmission = read_json_file(&args.input)?;
    let report = IntelligenceReport::from_submission(submission);
    write_json(&report, args.pretty)
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let submission: ResearchSubmission = read_json_file(&args.submission)?;
    let artifact: ContentArtifact = read_json_file(&args.artifact)?;

    let report = IntelligenceReport::from_submission(submission);
    let breakdown = ScoringEngine::default().score(&report.summary, &artifact);
    write_json(&breakdown, args.pretty)
}
