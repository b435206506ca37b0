//! Disk Sim entry point
//!
//! Headless driver: builds a scenario, steps it on a fixed cadence and appends
//! every step to a CSV log.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;

use disk_sim::consts::LOG_FILE_NAME;
use disk_sim::persistence::CsvLog;
use disk_sim::renderer::Frame;
use disk_sim::{Error, Preset, Result, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "disk-sim", about = "Elastic hard-disk collisions in a box")]
struct Args {
    /// Scenario JSON file (overrides --preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in scenario: four, gas, many, head-on
    #[arg(short, long, default_value = "four")]
    preset: String,

    /// Number of steps to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: u64,

    /// CSV log path
    #[arg(short, long, default_value = LOG_FILE_NAME)]
    output: PathBuf,

    /// RNG seed (overrides the scenario's)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between steps in milliseconds (the interactive cadence is 20)
    #[arg(long, default_value_t = 0)]
    interval_ms: u64,

    /// Log the HUD every N steps (0 = never)
    #[arg(long, default_value_t = 100)]
    report_every: u64,
}

fn load_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::load(path)?,
        None => {
            let preset = Preset::from_str(&args.preset).ok_or_else(|| {
                Error::InvalidParam(format!("unknown preset {:?}", args.preset))
            })?;
            log::info!("Using preset: {}", preset.as_str());
            ScenarioConfig::from_preset(preset)
        }
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let mut scenario = config.build()?;
    let arena = &mut scenario.arena;

    let mut log = CsvLog::create(&args.output, &arena.header())?;
    let interval = Duration::from_millis(args.interval_ms);
    let initial_energy = arena.kinetic_energy();

    let mut pairs = 0;
    let mut skipped = 0;
    for _ in 0..args.steps {
        let report = arena.step();
        log.append(&report.record)?;
        pairs += report.resolved_pairs;
        skipped += report.coincident_pairs + report.reverted_pairs;

        if args.report_every > 0 && arena.step_count() % args.report_every == 0 {
            let frame = Frame::capture(arena, &scenario.colors, scenario.timer_visible);
            log::info!("{}", frame.hud.lines().collect::<Vec<_>>().join(" | "));
            log::debug!(
                "frame: {} instances, {} bytes",
                frame.instances.len(),
                frame.instance_bytes().len()
            );
        }
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    log.flush()?;

    let final_energy = arena.kinetic_energy();
    log::info!(
        "Done: {} steps, t={:.3}, {} collisions, {} skipped pairs, energy {:.6} -> {:.6}",
        arena.step_count(),
        arena.elapsed_time(),
        pairs,
        skipped,
        initial_energy,
        final_energy
    );
    println!(
        "Wrote {} rows to {} (seed {})",
        log.rows(),
        args.output.display(),
        scenario.seed
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Disk Sim starting...");

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
