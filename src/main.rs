use std::path::Path;

use anyhow::Result;
use clap::Parser;

use bugworld_lib::model::config::SimConfig;
use bugworld_lib::model::world::World;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Maximum number of ticks to simulate (overrides the config)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// RNG seed (overrides the config)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    bugworld_lib::init_logging();
    let args = Args::parse();

    let mut config = SimConfig::load(Path::new(&args.config));
    if let Some(ticks) = args.ticks {
        config.world.tick_limit = ticks;
    }
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    let mut world = World::new(config)?;
    tracing::info!(
        width = world.width(),
        height = world.height(),
        bugs = world.bugs.len(),
        "world ready"
    );

    let mut last = None;
    while !world.finished() {
        let report = world.step()?;
        if report.tick % 100 == 0 {
            tracing::info!(
                tick = report.tick,
                population = report.population,
                total_food = report.total_food,
                max_bug_size = report.max_bug_size,
                "progress"
            );
        }
        last = Some(report);
    }

    if let Some(report) = last {
        tracing::info!(
            tick = report.tick,
            population = report.population,
            total_food = report.total_food,
            max_bug_size = report.max_bug_size,
            "simulation finished"
        );
    }

    Ok(())
}
