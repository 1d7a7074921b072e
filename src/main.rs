//! woodshop-plan - CLI tool for cut lists and project lesson plans.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use woodshop_plan::{
    generate_lesson_outline, load_cut_job, load_project, optimize_job_file, optimize_with_config,
    slice_project, validate_cut_list, ValidationResult,
};

/// Plan woodworking projects: optimize cut lists and slice projects into lessons.
#[derive(Parser, Debug)]
#[command(name = "woodshop-plan")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assign cut pieces to stock lengths and print the cut report
    Optimize {
        /// Input job file (JSON with cuts and stock)
        #[arg(short, long)]
        input: PathBuf,

        /// Output report file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Saw kerf in inches, overriding the job file
        #[arg(long)]
        kerf: Option<f64>,

        /// Output the result as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },

    /// Break a project into ordered lesson slices
    Slice {
        /// Input project file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output the slices as JSON instead of an outline
        #[arg(long)]
        json: bool,
    },

    /// Validate a job file without optimizing
    Validate {
        /// Input job file (JSON with cuts and stock)
        #[arg(short, long)]
        input: PathBuf,

        /// Saw kerf in inches, overriding the job file
        #[arg(long)]
        kerf: Option<f64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Optimize {
            input,
            output,
            kerf,
            json,
        } => run_optimize(input, output, kerf, json),
        Command::Slice { input, json } => run_slice(input, json),
        Command::Validate { input, kerf } => run_validate(input, kerf),
    }
}

fn run_optimize(
    input: PathBuf,
    output: Option<PathBuf>,
    kerf: Option<f64>,
    json: bool,
) -> Result<()> {
    info!("Processing: {}", input.display());

    let rendered = if json {
        let job =
            load_cut_job(&input).with_context(|| format!("Failed to load {}", input.display()))?;
        let config = job.config(kerf);
        log_validation(&validate_cut_list(&job.cuts, &job.stock, config.kerf))?;

        let result = optimize_with_config(&job.cuts, &job.stock, &config)?;
        serde_json::to_string_pretty(&result)?
    } else {
        optimize_job_file(&input, kerf)
            .with_context(|| format!("Failed to optimize {}", input.display()))?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn run_slice(input: PathBuf, json: bool) -> Result<()> {
    let project =
        load_project(&input).with_context(|| format!("Failed to load {}", input.display()))?;

    let slices = slice_project(&project);
    info!("Project {} sliced into {} lesson(s)", project.id, slices.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&slices)?);
    } else {
        print!("{}", generate_lesson_outline(&project.title, &slices)?);
    }

    Ok(())
}

fn run_validate(input: PathBuf, kerf: Option<f64>) -> Result<()> {
    let job = load_cut_job(&input).with_context(|| format!("Failed to load {}", input.display()))?;
    let config = job.config(kerf);
    log_validation(&validate_cut_list(&job.cuts, &job.stock, config.kerf))?;

    info!("Validation passed");
    Ok(())
}

fn log_validation(validation: &ValidationResult) -> Result<()> {
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    for err in &validation.errors {
        error!("{}", err);
    }
    if !validation.passed {
        anyhow::bail!("Validation failed");
    }
    Ok(())
}
