//! Snake Arena - command line runner
//!
//! Starts a game from flags and/or a TOML file, runs it for a number of
//! ticks and prints the outcome.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use snake_arena::core::error::{ArenaError, Result};
use snake_arena::engine::run_ticks;
use snake_arena::{new_game, ArenaConfig, Engine, GameState, TickScheduler};

/// Autonomous snakes competing for fruit on a grid
#[derive(Parser, Debug)]
#[command(name = "snake-arena")]
#[command(about = "Run an autonomous multi-snake simulation")]
struct Args {
    /// Grid width and height in cells
    #[arg(long)]
    grid_size: Option<u32>,

    /// Number of snakes to place
    #[arg(long)]
    snakes: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Ticks to run before printing the result
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Decision strategy: scoring or search
    #[arg(long)]
    strategy: Option<String>,

    /// TOML file with [game] and [engine] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Skip the wall clock and tick as fast as possible
    #[arg(long)]
    headless: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary<'a> {
    seed: u64,
    ticks: u64,
    strategy: &'a str,
    state: &'a GameState,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snake_arena=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut engine = Engine::with_seed(config.engine.clone(), seed)?;
    let strategy = engine.strategy_name();
    let state = new_game(&config.game, &mut engine)?;

    tracing::info!(
        "Running {} ticks with the {} strategy (seed {})",
        args.ticks,
        strategy,
        seed
    );

    let final_state = if args.headless {
        run_ticks(&mut engine, state, args.ticks)
    } else {
        let handle = TickScheduler::spawn_with_limit(
            engine,
            state,
            config.game.tick_interval(),
            Some(args.ticks),
        );
        handle.join().await?
    };

    match args.format.as_str() {
        "json" => {
            let summary = RunSummary {
                seed,
                ticks: final_state.tick,
                strategy,
                state: &final_state,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        _ => print_scoreboard(&final_state, seed),
    }

    Ok(())
}

/// File config first, then flag overrides, then validation
fn build_config(args: &Args) -> Result<ArenaConfig> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };

    if let Some(grid_size) = args.grid_size {
        config.game.grid_size = grid_size;
    }
    if let Some(snakes) = args.snakes {
        config.game.snake_count = snakes;
    }
    if let Some(speed) = args.speed {
        config.game.game_speed = speed;
    }
    if let Some(strategy) = &args.strategy {
        config.engine.strategy = strategy.parse()?;
    }
    if !matches!(args.format.as_str(), "text" | "json") {
        return Err(ArenaError::InvalidConfig(format!(
            "unknown format '{}', expected 'text' or 'json'",
            args.format
        )));
    }

    config.game.validate()?;
    config.engine.validate()?;
    Ok(config)
}

fn print_scoreboard(state: &GameState, seed: u64) {
    println!("\n=== SNAKE ARENA ===");
    println!(
        "Grid: {}x{}  Ticks: {}  Seed: {}",
        state.width, state.height, state.tick, seed
    );
    println!();
    println!("{:<6} {:>6} {:>6}  {:<10}", "Snake", "Score", "Length", "Effects");
    for snake in state.leaderboard() {
        let effects: Vec<String> = snake
            .power_ups
            .iter()
            .map(|p| format!("{:?}", p.kind))
            .collect();
        println!(
            "{:<6} {:>6} {:>6}  {:<10}",
            snake.id.to_string(),
            snake.score,
            snake.len(),
            effects.join(",")
        );
    }
    println!();
    println!("Fruit: {:?}", state.fruits.iter().map(|f| f.to_string()).collect::<Vec<_>>());
    println!("Power-ups on board: {}", state.power_ups.len());
}
