mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod scoring;
mod types;

use crate::catalog::Catalog;
use crate::error::{CoachError, Result};
use crate::types::athlete::Category;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_catalog(explicit: Option<&std::path::Path>) -> Result<Catalog> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, explicit)?;
    Catalog::load(&loaded)
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let catalog = load_catalog(cli.config.as_deref())?;
            let bundle = input::load_bundle(&cmd.input)?;
            let scores = scoring::compute_scores(
                &catalog,
                &bundle.physical,
                &bundle.technical,
                bundle.athlete.age_group,
                bundle.athlete.gender,
            );
            let athlete_type =
                scoring::classify_athlete(&scores, &catalog.classifier_thresholds());
            let rendered =
                report::render_scores(&scores, athlete_type, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Analyze(cmd) => {
            let catalog = load_catalog(cli.config.as_deref())?;
            let mut bundle = input::load_bundle(&cmd.input)?;
            let mut rng = match cmd.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            bundle.athlete.ensure_id(&mut rng);

            let scores = scoring::compute_scores(
                &catalog,
                &bundle.physical,
                &bundle.technical,
                bundle.athlete.age_group,
                bundle.athlete.gender,
            );
            let athlete_type =
                scoring::classify_athlete(&scores, &catalog.classifier_thresholds());
            tracing::info!(%athlete_type, "athlete classified");

            let narrative = cmd.narrative.as_deref().and_then(report::narrative::load);
            let result = report::assemble::build_report(
                &catalog,
                &scores,
                athlete_type,
                narrative.as_ref(),
                &mut rng,
            )
            .with_bundle(bundle);

            let rendered = report::render(&result, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check => {
            let catalog = load_catalog(cli.config.as_deref())?;
            let thresholds = catalog.classifier_thresholds();
            let categories = Category::all()
                .filter(|category| catalog.coefficient(*category).is_some())
                .count();
            if !cli.quiet {
                println!(
                    "check: ok ({} standards, {} categories, bottleneck <= {} x{}, archetype >= {})",
                    catalog.standards().count(),
                    categories,
                    thresholds.bottleneck_cutoff,
                    thresholds.bottleneck_min_count,
                    thresholds.archetype_cutoff
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                CoachError::InvalidMeasurement(_) | CoachError::InputParse(_) => {
                    exit_code::INVALID_INPUT
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
