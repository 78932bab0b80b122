use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{WrapErr, bail};
use roiplan::util::io::atomic_write;
use roiplan::{OutputFormat, ScenarioFile, init_logging, write_report};
use roiplan_core::{StaticBenchmarks, evaluate, evaluate_with_monte_carlo};

#[derive(Parser, Debug)]
#[command(name = "roiplan")]
#[command(about = "Automation ROI modeling and risk simulation")]
struct Args {
    /// Scenario file (YAML)
    input: PathBuf,

    /// Monte Carlo iterations (overrides the scenario file)
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Master seed for reproducible Monte Carlo runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the Monte Carlo simulation
    #[arg(long)]
    no_monte_carlo: bool,

    /// Write the full report to this file (.json or .yaml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to the data directory (default: ~/.roiplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roiplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    // Fail on a bad --output before spending time on the simulation
    let output = args
        .output
        .as_ref()
        .map(|path| OutputFormat::from_path(path).map(|format| (path, format)))
        .transpose()?;

    let file = ScenarioFile::load(&args.input)?;
    let config = file.engine.clone().unwrap_or_default();
    if config.scenarios.0.is_empty() {
        bail!("{} defines an empty scenario table", args.input.display());
    }
    let inputs = config
        .normalize
        .normalize(&file.inputs, &StaticBenchmarks)
        .wrap_err_with(|| format!("invalid inputs in {}", args.input.display()))?;
    tracing::info!(input = %args.input.display(), "Inputs normalized");

    let report = if args.no_monte_carlo {
        evaluate(&inputs, &config)
    } else {
        let mc = file.monte_carlo_settings(args.iterations, args.seed);
        tracing::info!(iterations = mc.iterations, seed = ?mc.seed, "Running Monte Carlo");
        evaluate_with_monte_carlo(&inputs, &config, &mc)
    };

    let mut text = String::new();
    write_report(&mut text, &report)?;
    print!("{text}");

    if let Some((path, format)) = output {
        let content = format.serialize(&report)?;
        atomic_write(path, &content)
            .wrap_err_with(|| format!("writing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Report written");
    }

    Ok(())
}
