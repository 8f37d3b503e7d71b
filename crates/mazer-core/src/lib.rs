//! **mazer-core** — foundational types shared by the mazer crates.
//!
//! This crate provides grid geometry and the cell/vertex bijection
//! ([`Dims`]), the undirected passage graph carved by the generator
//! ([`GridGraph`]), the common error type ([`MazeError`]) and a small
//! character [`Canvas`] used by renderers.

pub mod canvas;
pub mod error;
pub mod geom;
pub mod graph;

pub use canvas::{Canvas, Color, Frame, FrameGlyph, Glyph, compute_frame};
pub use error::MazeError;
pub use geom::{Cell, Dims, Direction};
pub use graph::GridGraph;
