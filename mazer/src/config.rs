//! Command-line parsing and the per-run [`Config`].

use std::time::Duration;

use clap::{Parser, ValueEnum};
use mazer_core::{Dims, MazeError};

/// Where the solved maze goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Draw the maze in the terminal and reveal the path step by step.
    #[default]
    Animate,
    /// Print the maze with its path as plain text.
    Text,
    /// Print the maze graph, endpoints and path as JSON.
    Json,
}

/// Generate a perfect maze and animate its shortest path.
#[derive(Parser, Debug)]
#[command(name = "mazer", version, about, long_about = None)]
pub struct Cli {
    /// Number of rows (at least 2)
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    rows: u32,

    /// Number of columns (at least 2)
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    cols: u32,

    /// Log the maze graph, chosen vertices and path, and draw the cell grid
    #[arg(long)]
    debug: bool,

    /// Random seed; drawn at random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between path steps, in milliseconds
    #[arg(long, default_value_t = 250)]
    delay_ms: u64,

    /// How long the solved maze stays up, in milliseconds; waits for a key
    /// when absent
    #[arg(long)]
    hold_ms: Option<u64>,

    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Animate)]
    output: OutputMode,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            rows: self.rows as usize,
            cols: self.cols as usize,
            debug: self.debug,
            seed: self.seed,
            delay: Duration::from_millis(self.delay_ms),
            hold: self.hold_ms.map(Duration::from_millis),
            output: self.output,
        }
    }
}

/// Settings for a single maze run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub debug: bool,
    pub seed: Option<u64>,
    pub delay: Duration,
    pub hold: Option<Duration>,
    pub output: OutputMode,
}

impl Config {
    /// Validated grid dimensions.
    pub fn dims(&self) -> Result<Dims, MazeError> {
        Dims::new(self.rows, self.cols)
    }

    /// Default `env_logger` filter; `RUST_LOG` still wins.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::MazeOrchestrator;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Cli::try_parse_from(std::iter::once("mazer").chain(args.iter().copied()))
            .map(Cli::into_config)
    }

    #[test]
    fn defaults() {
        let c = parse(&["10", "20"]).unwrap();
        assert_eq!((c.rows, c.cols), (10, 20));
        assert!(!c.debug);
        assert_eq!(c.seed, None);
        assert_eq!(c.delay, Duration::from_millis(250));
        assert_eq!(c.hold, None);
        assert_eq!(c.output, OutputMode::Animate);
        assert_eq!(c.log_filter(), "info");
        assert_eq!(c.dims().unwrap().len(), 200);
    }

    #[test]
    fn flags() {
        let c = parse(&["3", "4", "--debug", "--seed", "9", "--delay-ms", "0", "--output", "json"])
            .unwrap();
        assert!(c.debug);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.delay, Duration::ZERO);
        assert_eq!(c.output, OutputMode::Json);
        assert_eq!(c.log_filter(), "debug");
    }

    #[test]
    fn hold_is_optional() {
        let c = parse(&["4", "4", "--hold-ms", "1500"]).unwrap();
        assert_eq!(c.hold, Some(Duration::from_millis(1500)));
        assert!(parse(&["4", "4", "--hold-ms", "soon"]).is_err());
    }

    #[test]
    fn debug_does_not_change_the_maze() {
        let run = |args: &[&str]| {
            let c = parse(args).unwrap();
            let seed = c.seed.unwrap();
            let dims = c.dims().unwrap();
            MazeOrchestrator::new(StdRng::seed_from_u64(seed))
                .run(dims.rows(), dims.cols())
                .unwrap()
        };
        let plain = run(&["9", "13", "--seed", "31"]);
        let debug = run(&["9", "13", "--seed", "31", "--debug"]);
        assert_eq!(plain, debug);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(parse(&["1", "5"]).is_err());
        assert!(parse(&["5", "x"]).is_err());
        assert!(parse(&["-3", "5"]).is_err());
        assert!(parse(&["5"]).is_err());
        assert!(parse(&["5", "5", "5"]).is_err());
    }

    #[test]
    fn debug_flag_can_come_first() {
        let c = parse(&["--debug", "2", "2"]).unwrap();
        assert!(c.debug);
        assert_eq!((c.rows, c.cols), (2, 2));
    }
}
