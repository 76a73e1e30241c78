use trisim::{Scenario, ScenarioConfig, ConfigError};
use trisim::{bodies_from_config, validate_bodies};
use trisim::{run_sweep, SweepGrid, SweepSettings};
use trisim::{bench_accel, bench_rk4, bench_sweep};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "triad.yaml")]
    file_name: String,

    /// Run the stability sweep from the scenario's sweep section
    #[arg(long, default_value_t = false)]
    sweep: bool,

    /// Run the benchmark suite instead of a scenario
    #[arg(long, default_value_t = false)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Headless run: drive the clock in fixed visual increments the way a frame
/// loop would, sampling total energy once per simulated second.
fn run_simulation(cfg: ScenarioConfig) -> Result<()> {
    let mut scenario = Scenario::build_scenario(cfg)?;
    let t_end = scenario.parameters.t_end;
    let e0 = scenario.total_energy();

    info!(
        "running {} bodies to t = {t_end} at h0 = {}",
        scenario.system.bodies.len(),
        scenario.parameters.h0
    );

    let frame = 1.0 / 60.0;
    let mut next_sample = 1.0;
    while scenario.system.t < t_end {
        scenario.advance(frame);
        if scenario.system.t >= next_sample {
            let e = scenario.total_energy();
            println!(
                "t = {:8.2}  E = {:14.6}  drift = {:+.3e}",
                scenario.system.t,
                e,
                e - e0
            );
            next_sample += 1.0;
        }
    }

    let e = scenario.total_energy();
    println!("final: t = {:.2}, E = {:.6}, drift = {:+.3e}", scenario.system.t, e, e - e0);

    Ok(())
}

/// Sweep mode: evaluate the 2D perturbation grid and print the score field
/// as CSV, one line per row.
fn run_sweep_mode(cfg: ScenarioConfig) -> Result<()> {
    let sweep_cfg = cfg.sweep.clone().ok_or(ConfigError::MissingSweep)?;

    let bodies = bodies_from_config(&cfg.bodies)?;
    validate_bodies(&bodies)?;

    let settings = SweepSettings {
        step_budget: sweep_cfg.step_budget,
        dt: sweep_cfg.dt,
        escape_radius: sweep_cfg.escape_radius,
        eps2: cfg.parameters.eps2,
        G: cfg.parameters.G,
    };
    let grid = SweepGrid::from_config(&sweep_cfg)?;

    info!(
        "sweeping {res}x{res} cells ({} vs {}), budget {} at dt = {}",
        sweep_cfg.x_param,
        sweep_cfg.y_param,
        settings.step_budget,
        settings.dt,
        res = grid.resolution,
    );

    let t0 = Instant::now();
    let scores = run_sweep(&bodies, &settings, &grid);
    info!("sweep finished in {:.2} s", t0.elapsed().as_secs_f64());

    for row in &scores {
        let line: Vec<String> = row.iter().map(|s| format!("{s:.3}")).collect();
        println!("{}", line.join(","));
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_accel();
        bench_rk4();
        bench_sweep();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    if args.sweep {
        run_sweep_mode(scenario_cfg)?;
    } else {
        run_simulation(scenario_cfg)?;
    }

    Ok(())
}
