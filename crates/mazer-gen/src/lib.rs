//! Maze generation for mazer.
//!
//! [`MazeGen`] carves a perfect maze (a spanning tree of the grid) into a
//! fresh [`GridGraph`](mazer_core::GridGraph) with the recursive
//! backtracker, driven by an injected random source.

pub mod backtracker;

pub use backtracker::{DirectionPicker, FixedOrder, MazeGen, UniformShuffle};
