use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use site_admission::admission::{BatchEvaluator, CancelFlag};
use site_admission::config::AppConfig;
use site_admission::error::AppError;
use site_admission::{intake, telemetry, AdmissionEngine, BlacklistIndex};

#[derive(Parser, Debug)]
#[command(
    name = "site-admission",
    about = "Run contractor admission checks for a restricted industrial site",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a contractor roster against the admission policy
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Roster CSV exported by the intake system
    #[arg(long)]
    roster: PathBuf,
    /// Blacklist CSV; omitted or unreadable means an empty denylist
    #[arg(long)]
    blacklist: Option<PathBuf>,
    /// Override the configured worker-pool size
    #[arg(long)]
    workers: Option<usize>,
    /// Override the progress-log cadence (records)
    #[arg(long)]
    progress_every: Option<usize>,
    /// Write the per-person decisions as JSON for downstream report tooling
    #[arg(long)]
    out: Option<PathBuf>,
}

async fn run_check(args: CheckArgs, config: AppConfig) -> Result<(), AppError> {
    let persons = intake::read_roster(&args.roster)?;
    info!(roster = %args.roster.display(), persons = persons.len(), "roster loaded");

    let index = match &args.blacklist {
        Some(path) => BlacklistIndex::load(path),
        None => BlacklistIndex::empty(),
    };

    let engine = AdmissionEngine::new(config.admission);
    let evaluator = BatchEvaluator::new(engine)
        .with_workers(args.workers.unwrap_or(config.batch.workers))
        .with_progress_every(args.progress_every.unwrap_or(config.batch.progress_every));

    let outcome = evaluator
        .evaluate_all(Arc::new(persons), Arc::new(index), CancelFlag::new())
        .await?;

    if let Some(path) = &args.out {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &outcome.decisions)?;
        info!(out = %path.display(), "decisions written");
    }

    let report = &outcome.report;
    info!(
        total = report.total,
        passed = report.pass_count,
        failed = report.fail_count,
        blacklist_hits = report.blacklist_hits,
        expired_credentials = report.expired_credentials,
        incomplete_training = report.incomplete_training,
        qualification_mismatches = report.qualification_mismatches,
        data_errors = report.data_errors,
        warnings = report.warning_count,
        "admission summary"
    );

    Ok(())
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Check(args) => run_check(args, config).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
