#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Goblin Trail in the terminal.

mod config;
mod terminal;

use std::{io::BufRead, path::PathBuf, thread, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use goblin_trail_core::{AgentId, WELCOME_BANNER};
use goblin_trail_engine::{channel, EngineHandle, TurnEngine};
use goblin_trail_session::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{AlgorithmArg, Overrides},
    terminal::TerminalPresentation,
};

const DEFAULT_LOG_FILTER: &str = "goblin_trail=info";

/// Race a bot along a goblin-infested hex trail.
#[derive(Parser, Debug)]
#[command(name = "goblin-trail")]
#[command(about = "Race a bot along a goblin-infested hex trail")]
struct Args {
    /// TOML file with game configuration values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// Path construction strategy
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Grid radius in cells
    #[arg(long)]
    radius: Option<i32>,

    /// Number of cells along the trail
    #[arg(long)]
    path_length: Option<usize>,

    /// Number of goblins hidden on the trail
    #[arg(long)]
    hazards: Option<usize>,

    /// Roll for the player automatically and exit when the game ends
    #[arg(long)]
    autoplay: bool,

    /// Duration of a simulated move animation in milliseconds
    #[arg(long, default_value_t = 300)]
    move_millis: u64,
}

/// Entry point for the Goblin Trail command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let overrides = Overrides {
        seed: args.seed,
        algorithm: args.algorithm,
        grid_radius: args.radius,
        path_length: args.path_length,
        hazard_count: args.hazards,
    };
    let config = config::apply(config::load(args.config.as_deref())?, overrides);
    info!(seed = config.seed, algorithm = ?config.path_algorithm, "starting game");

    let session = GameSession::new(config).context("failed to build the board")?;
    let (handle, inbox) = channel();
    let presentation = TerminalPresentation::new(
        handle.clone(),
        Duration::from_millis(args.move_millis),
        args.autoplay,
    );
    let mut engine = TurnEngine::new(session, presentation, inbox);

    println!("{WELCOME_BANNER}");
    if !args.autoplay {
        spawn_input_reader(handle);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start the async runtime")?;
    runtime
        .block_on(engine.run())
        .context("the game stopped unexpectedly")?;
    Ok(())
}

/// Forwards terminal commands to the engine from a background thread.
fn spawn_input_reader(handle: EngineHandle) {
    let _ = thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let sent = match line.trim() {
                "" | "roll" => handle.request_roll(AgentId::Player),
                "reset" => handle.reset_game(),
                "quit" | "q" => {
                    let _ = handle.shutdown();
                    return;
                }
                other => {
                    println!("Unknown command `{other}`; press Enter to roll, or type reset or quit.");
                    Ok(())
                }
            };
            if sent.is_err() {
                return;
            }
        }
        let _ = handle.shutdown();
    });
}
