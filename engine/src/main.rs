//! Batch CLI entry point
//!
//! Reads an FEA parameter CSV, runs the adjustment loop with
//! flag-overridable settings, and writes the scored table back out.

use clap::Parser;
use std::path::PathBuf;

use engine::optimization::{AdjustmentLoop, AdjustmentSettings, FixedStepStrategy};
use engine::{ingest, grid, EngineResult, SurrogateModel, UniformNoise};
use shared::logging::{self, Component};

/// Batch HIC scoring and adjustment over an FEA parameter table
#[derive(Parser)]
#[command(name = "engine")]
#[command(about = "Scores FEA parameter rows and adjusts rows above the safety threshold")]
pub struct Args {
    /// Input CSV with X,Y,Thickness,Stiffness,Velocity,Penetration columns
    #[arg(long)]
    pub input: PathBuf,

    /// Output CSV path (prints to stdout if not provided)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Optional path for the pivoted heatmap grid as JSON
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Safety threshold above which rows are adjusted
    #[arg(long, default_value_t = AdjustmentSettings::DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Iteration budget for the adjustment loop
    #[arg(long, default_value_t = AdjustmentSettings::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Additive thickness step for flagged rows (mm)
    #[arg(long, default_value_t = AdjustmentSettings::DEFAULT_THICKNESS_STEP)]
    pub thickness_step: f64,

    /// Additive stiffness step for flagged rows (MPa)
    #[arg(long, default_value_t = AdjustmentSettings::DEFAULT_STIFFNESS_STEP)]
    pub stiffness_step: f64,

    /// Amplitude of the uniform prediction noise
    #[arg(long, default_value_t = UniformNoise::DEFAULT_AMPLITUDE)]
    pub noise_amplitude: f64,

    /// Seed for reproducible noise (entropy-seeded if not provided)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn main() -> EngineResult<()> {
    let args = Args::parse();

    logging::init_tracing(Component::Engine, Some(&args.log_level));
    logging::log_startup(Component::Engine, "batch HIC adjustment run");

    let settings = AdjustmentSettings {
        threshold: args.threshold,
        max_iterations: args.max_iterations,
        thickness_step: args.thickness_step,
        stiffness_step: args.stiffness_step,
    };
    let runner = AdjustmentLoop::new(settings)?;
    let strategy = FixedStepStrategy::from_settings(&settings);

    let noise = match args.seed {
        Some(seed) => UniformNoise::seeded(seed, args.noise_amplitude),
        None => UniformNoise::new(args.noise_amplitude),
    };
    let mut model = SurrogateModel::with_default_weights(Box::new(noise));

    let mut table = ingest::read_table_from_path(&args.input)?;
    logging::log_progress(
        Component::Engine,
        "Loaded table",
        &format!("{} row(s) from {}", table.len(), args.input.display()),
    );

    let report = runner.run(&mut table, &mut model, &strategy);
    logging::log_progress(Component::Engine, "Adjustment loop", &report.summary());

    match &args.output {
        Some(path) => {
            ingest::write_table_to_path(path, &table)?;
            logging::log_success(
                Component::Engine,
                &format!("Wrote scored table to {}", path.display()),
            );
        }
        None => {
            ingest::write_table(std::io::stdout(), &table)?;
        }
    }

    if let Some(path) = &args.grid {
        let pivoted = grid::pivot(&table)?;
        let json = serde_json::to_string_pretty(&pivoted)?;
        std::fs::write(path, json)?;
        logging::log_success(
            Component::Engine,
            &format!(
                "Wrote {}x{} heatmap grid to {}",
                pivoted.width(),
                pivoted.height(),
                path.display()
            ),
        );
    }

    logging::log_shutdown(Component::Engine, "run complete");
    Ok(())
}
