//! Run a cleaning simulation on a text map.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin marga-sim -- --map maps/rooms.txt --strategy policy --slip 0.2 --seed 7
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use marga::config::MargaConfig;
use marga::io::load_map;
use marga::policy::{ValueIteration, closest_reachable_goal};
use marga::sim::{SimError, Simulation, Strategy, driver_for};

#[derive(Parser)]
#[command(name = "marga-sim")]
#[command(about = "Simulate a cleaning agent planning with search or value iteration")]
struct Args {
    /// Map file (R=start, C=clean, D=dirty, W=wall, T=target)
    #[arg(short, long)]
    map: PathBuf,

    /// YAML config (defaults to configs/marga.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Planning strategy: search or policy
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// RNG seed (0 = seed from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a move drifts sideways
    #[arg(long)]
    slip: Option<f64>,

    /// Tick budget
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the utility matrix and policy for the closest goal before running
    #[arg(long)]
    show_policy: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> marga::Result<()> {
    let mut config = match &args.config {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };
    if let Some(strategy) = args.strategy {
        config.simulation.strategy = strategy;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(slip) = args.slip {
        config.simulation.slip_probability = slip;
    }
    if let Some(max_ticks) = args.max_ticks {
        config.simulation.max_ticks = max_ticks;
    }
    config.validate()?;

    let layout = load_map(&args.map)?;
    let start = layout.first_start().ok_or(SimError::NoAgentStart)?;
    let counts = layout.grid.counts();

    info!("marga-sim starting...");
    info!("  Map: {} ({}x{})", args.map.display(), layout.grid.rows(), layout.grid.cols());
    info!("  Start: {}", start);
    info!("  Goals: {} dirty, {} target", counts.dirty, counts.target);
    info!("  Strategy: {}", config.simulation.strategy);
    info!("  Slip: {}", config.simulation.slip_probability);

    println!("{}", layout.grid);

    if args.show_policy {
        if let Some(goal) = closest_reachable_goal(&layout.grid, start) {
            let solver = ValueIteration::new(config.to_value_iteration_config());
            let solution = solver.solve_single(&layout.grid, goal)?;
            println!("Utilities (terminal {}, {} sweeps):", goal, solution.sweeps);
            println!("{}", solution.utilities);
            println!("Policy:");
            println!("{}", solution.policy);
        } else {
            println!("No reachable goals to solve for.\n");
        }
    }

    let driver = driver_for(
        config.simulation.strategy,
        config.to_search_config(),
        config.to_value_iteration_config(),
    );
    let mut sim = Simulation::new(
        layout.grid.clone(),
        start,
        driver,
        config.to_simulation_config(),
    )?;
    let report = sim.run()?;

    println!("{}", sim.grid());
    print!("{}", report);
    Ok(())
}
