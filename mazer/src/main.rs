//! mazer — generate a perfect maze and animate its shortest path.
//!
//! Run: cargo run -- <ROWS> <COLS> [--debug] [--seed N] [--hold-ms N] [--output animate|text|json]

use std::error::Error;
use std::io::{self, IsTerminal};

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use mazer::{Cli, MazeOrchestrator, MazeView, OutputMode, render_solved};
use mazer_crossterm::TermAnimator;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Cli::parse().into_config();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let dims = config.dims()?;
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating {dims} maze with seed {seed}");

    let mut orchestrator = MazeOrchestrator::new(StdRng::seed_from_u64(seed));
    let solved = orchestrator.run(dims.rows(), dims.cols())?;

    match config.output {
        OutputMode::Animate if io::stdout().is_terminal() => {
            let view = MazeView::new(&solved.graph).with_grid(config.debug);
            let base = view.base(solved.start, solved.goal);
            TermAnimator::new()
                .with_delay(config.delay)
                .with_hold(config.hold)
                .play(&base, view.path_steps(&solved.path))?;
        }
        OutputMode::Animate | OutputMode::Text => {
            println!("{}", render_solved(&solved, config.debug));
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&solved)?);
        }
    }
    Ok(())
}
