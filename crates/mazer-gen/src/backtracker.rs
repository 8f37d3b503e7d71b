//! Perfect-maze generation with the recursive backtracker.
//!
//! Starting from cell (0, 0), the generator visits an unvisited neighbour in
//! a random direction, opens the wall between the two cells and continues
//! from there; when every neighbour of the current cell is visited or out of
//! bounds it backs up to the cell it came from. Every cell is reached exactly
//! once through exactly one opened wall, so the result is a spanning tree
//! with `rows * cols - 1` passages.
//!
//! The walk can be as deep as the number of cells, so it runs on an explicit
//! stack of frames rather than the call stack.

use log::trace;
use mazer_core::{Cell, Dims, Direction, GridGraph, MazeError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Chooses the order in which a cell's four neighbours are tried.
pub trait DirectionPicker {
    /// Return the four directions in visiting order, drawing from `rng`.
    fn directions(&self, rng: &mut impl Rng) -> [Direction; 4];
}

/// A fresh uniformly random permutation for every cell.
pub struct UniformShuffle;

impl DirectionPicker for UniformShuffle {
    fn directions(&self, rng: &mut impl Rng) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs
    }
}

/// The same order for every cell. Carves predictable, maximally deep mazes.
#[derive(Debug, Clone, Copy)]
pub struct FixedOrder(pub [Direction; 4]);

impl DirectionPicker for FixedOrder {
    fn directions(&self, _rng: &mut impl Rng) -> [Direction; 4] {
        self.0
    }
}

/// One suspended visit: the cell, its direction order and how many of those
/// directions were already tried.
struct Frame {
    cell: Cell,
    dirs: [Direction; 4],
    next: usize,
}

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a perfect maze of `rows` x `cols` cells.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either side is below 2.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<GridGraph, MazeError> {
        self.carve(Dims::new(rows, cols)?)
    }

    /// Carve a perfect maze on `dims`, shuffling directions per cell.
    pub fn carve(&mut self, dims: Dims) -> Result<GridGraph, MazeError> {
        self.carve_with(dims, &UniformShuffle)
    }

    /// Carve a perfect maze on `dims` using `picker` to order neighbours.
    ///
    /// The picker is consulted once per cell, at the moment the cell is first
    /// entered, so a seeded `rng` always yields the same maze.
    pub fn carve_with(
        &mut self,
        dims: Dims,
        picker: &impl DirectionPicker,
    ) -> Result<GridGraph, MazeError> {
        let mut graph = GridGraph::with_dims(dims);
        let mut visited = vec![false; dims.len()];
        let mut stack: Vec<Frame> = Vec::new();
        let mut max_depth = 0;

        visited[dims.vertex_of(Cell::ORIGIN)] = true;
        stack.push(Frame {
            cell: Cell::ORIGIN,
            dirs: picker.directions(&mut self.rng),
            next: 0,
        });

        while let Some(top) = stack.last_mut() {
            let Some(&dir) = top.dirs.get(top.next) else {
                // All four tried: back up to the parent cell.
                stack.pop();
                continue;
            };
            top.next += 1;
            let from = top.cell;

            let Some(to) = dims.neighbor(from, dir) else {
                continue;
            };
            let to_vertex = dims.vertex_of(to);
            if visited[to_vertex] {
                continue;
            }

            graph.add_edge(dims.vertex_of(from), to_vertex)?;
            visited[to_vertex] = true;
            stack.push(Frame {
                cell: to,
                dirs: picker.directions(&mut self.rng),
                next: 0,
            });
            max_depth = max_depth.max(stack.len());
        }

        trace!(
            "carved {dims} maze: {} passages, max depth {max_depth}",
            graph.edge_count()
        );
        Ok(graph)
    }
}
