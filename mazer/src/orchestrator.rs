//! Generation → goal selection → search, as one run.

use log::{debug, info};
use mazer_core::{Dims, GridGraph, MazeError};
use mazer_gen::MazeGen;
use mazer_paths::{Path, PathFinder};
use rand::{Rng, RngExt};

/// The start vertex: cell (0, 0).
pub const START: usize = 0;

/// A generated maze with its solution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SolvedMaze {
    pub graph: GridGraph,
    pub start: usize,
    pub goal: usize,
    pub path: Path,
}

impl SolvedMaze {
    #[inline]
    pub fn dims(&self) -> Dims {
        self.graph.dims()
    }
}

/// Pick a goal uniformly from `[vertex_count / 2, vertex_count)`.
///
/// The midpoint rounds down, so the goal always lies at or past the middle
/// vertex ID. `vertex_count` must be at least 2.
pub fn pick_goal(rng: &mut impl Rng, vertex_count: usize) -> usize {
    rng.random_range(vertex_count / 2..vertex_count)
}

/// Runs generation and search with one random source.
pub struct MazeOrchestrator<R: Rng> {
    generator: MazeGen<R>,
    finder: PathFinder,
}

impl<R: Rng> MazeOrchestrator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            generator: MazeGen::new(rng),
            finder: PathFinder::new(0),
        }
    }

    /// Carve a `rows` x `cols` maze, pick a goal and solve from [`START`].
    ///
    /// [`MazeError::NoPathFound`] means the carved graph is not a spanning
    /// tree; callers should treat it as fatal.
    pub fn run(&mut self, rows: usize, cols: usize) -> Result<SolvedMaze, MazeError> {
        let graph = self.generator.generate(rows, cols)?;
        debug!("maze graph:\n{graph}");

        let dims = graph.dims();
        let count = graph.vertex_count();
        let center = count / 2;
        let goal = pick_goal(&mut self.generator.rng, count);
        debug!("start vertex:  {START} {}", dims.cell_of(START));
        debug!("center vertex: {center} {}", dims.cell_of(center));
        debug!("goal vertex:   {goal} {}", dims.cell_of(goal));

        let path = self.finder.shortest_path(&graph, START, goal)?;
        debug!("path from {START} to {goal}: {path}");
        info!(
            "solved {dims} maze: {} steps from {} to {}",
            path.len(),
            dims.cell_of(START),
            dims.cell_of(goal)
        );

        Ok(SolvedMaze {
            graph,
            start: START,
            goal,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn goal_stays_in_second_half() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [2usize, 3, 4, 5, 9, 100, 101] {
            for _ in 0..200 {
                let g = pick_goal(&mut rng, count);
                assert!(count / 2 <= g && g < count, "{g} outside [{}, {count})", count / 2);
            }
        }
    }

    #[test]
    fn same_draw_same_goal() {
        let a = pick_goal(&mut StdRng::seed_from_u64(77), 64);
        let b = pick_goal(&mut StdRng::seed_from_u64(77), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn run_solves_from_origin() {
        let mut orch = MazeOrchestrator::new(StdRng::seed_from_u64(5));
        let solved = orch.run(8, 11).unwrap();
        assert_eq!(solved.start, 0);
        assert!((44..88).contains(&solved.goal));
        assert_eq!(solved.path.start(), 0);
        assert_eq!(solved.path.goal(), solved.goal);
        assert_eq!(solved.graph.edge_count(), 87);
        for (a, b) in solved.path.steps() {
            assert!(solved.graph.has_edge(a, b));
        }
    }

    #[test]
    fn two_by_two_run() {
        let mut orch = MazeOrchestrator::new(StdRng::seed_from_u64(0));
        let solved = orch.run(2, 2).unwrap();
        assert_eq!(solved.graph.edge_count(), 3);
        assert!(solved.goal == 2 || solved.goal == 3);
        // In a 2x2 tree every cell is at most 3 passages from the start.
        assert!((1..=3).contains(&solved.path.len()));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let a = MazeOrchestrator::new(StdRng::seed_from_u64(2024)).run(15, 9).unwrap();
        let b = MazeOrchestrator::new(StdRng::seed_from_u64(2024)).run(15, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_dimensions_are_fatal() {
        let mut orch = MazeOrchestrator::new(StdRng::seed_from_u64(0));
        assert_eq!(
            orch.run(1, 5),
            Err(MazeError::InvalidDimension { rows: 1, cols: 5 })
        );
    }

    #[test]
    fn solved_maze_serializes() {
        let solved = MazeOrchestrator::new(StdRng::seed_from_u64(3)).run(2, 3).unwrap();
        let json: serde_json::Value = serde_json::to_value(&solved).unwrap();
        assert_eq!(json["graph"]["rows"], 2);
        assert_eq!(json["graph"]["cols"], 3);
        assert_eq!(json["graph"]["edges"].as_array().unwrap().len(), 5);
        assert_eq!(json["start"], 0);
        assert_eq!(json["path"][0], 0);
    }
}
