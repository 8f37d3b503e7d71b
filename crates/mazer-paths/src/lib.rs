//! Graph search for mazes.
//!
//! - **BFS** shortest paths by edge count ([`PathFinder::shortest_path`],
//!   [`PathFinder::bfs`], [`PathFinder::path_to`])
//! - **Connected components** labelling ([`PathFinder::cc_map_all`]) and the
//!   perfect-maze check built on it ([`PathFinder::is_perfect_maze`])
//!
//! All searches run through [`PathFinder`], which owns and reuses its
//! internal buffers so repeated queries do not allocate after warm-up.
//! Graphs are consumed through the [`Pather`] trait, which [`GridGraph`]
//! implements.
//!
//! [`GridGraph`]: mazer_core::GridGraph

mod bfs;
mod cc;
mod finder;
mod path;
mod traits;

pub use finder::{PathFinder, UNREACHABLE};
pub use path::Path;
pub use traits::Pather;
