//! mazer — carve a perfect maze, solve it with breadth-first search and
//! show the solution.
//!
//! The binary wires [`config`], [`orchestrator`] and [`view`] to the
//! crossterm animator; the library half is what the tests exercise.

pub mod config;
pub mod orchestrator;
pub mod view;

pub use config::{Cli, Config, OutputMode};
pub use orchestrator::{MazeOrchestrator, START, SolvedMaze, pick_goal};
pub use view::{MazeView, render_solved};
