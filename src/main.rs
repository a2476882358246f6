use anyhow::{Context, Result};
use clap::Parser;
use forage_core::config::SimConfig;
use forage_lib::app::{run_headless, Session};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "forage.toml")]
    config: String,

    /// Override the number of players
    #[arg(long)]
    players: Option<usize>,

    /// Override the number of food items
    #[arg(long)]
    food: Option<usize>,

    /// Seed for the spawn layout
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of ticks to simulate
    #[arg(long, default_value_t = 60 * 60 * 10)]
    ticks: u64,

    /// Print the final world snapshot as JSON instead of the standings
    #[arg(long)]
    json: bool,
}

fn load_config(path: &str) -> Result<SimConfig> {
    if !Path::new(path).exists() {
        tracing::debug!(path, "No config file, using defaults");
        return Ok(SimConfig::default());
    }
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    SimConfig::from_toml(&content).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    forage_core::init_logging();
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(players) = args.players {
        config.arena.player_count = players;
    }
    if let Some(food) = args.food {
        config.arena.food_count = food;
    }
    if args.seed.is_some() {
        config.arena.seed = args.seed;
    }

    let mut session = Session::new(config)?;
    let report = run_headless(&mut session, args.ticks);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.world().snapshot())?);
        return Ok(());
    }

    println!(
        "seed {} | {} ticks | {:.2}s simulated | {} food left | {}",
        report.seed,
        report.ticks,
        report.elapsed_secs,
        report.remaining_food,
        report.finish.as_deref().unwrap_or("tick budget exhausted"),
    );
    for (rank, standing) in report.standings.iter().enumerate() {
        println!(
            "{:>2}. player {} - {} eaten",
            rank + 1,
            standing.player_id,
            standing.score
        );
    }
    Ok(())
}
