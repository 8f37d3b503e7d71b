use mazer_core::MazeError;

use crate::PathFinder;
use crate::finder::UNREACHABLE;
use crate::path::Path;
use crate::traits::Pather;

impl PathFinder {
    /// Run a breadth-first search from `source` over the whole graph.
    ///
    /// Neighbours are expanded in the order the pather reports them. After
    /// the call every vertex reachable from `source` has a BFS distance and a
    /// predecessor link. Fails if `source` is not a vertex of `pather`.
    pub fn bfs<P: Pather>(&mut self, pather: &P, source: usize) -> Result<(), MazeError> {
        let count = pather.vertex_count();
        if source >= count {
            return Err(MazeError::VertexOutOfRange { vertex: source, count });
        }
        if count != self.len {
            self.set_len(count);
        }

        // Reset.
        self.dist.fill(UNREACHABLE);
        self.edge_to.fill(UNREACHABLE);
        self.queue.clear();

        self.source = Some(source);
        self.dist[source] = 0;
        self.queue.push_back(source);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(v) = self.queue.pop_front() {
            let next_dist = self.dist[v] + 1;

            nbuf.clear();
            pather.neighbors(v, &mut nbuf);

            for &w in nbuf.iter() {
                if w >= self.len || self.dist[w] != UNREACHABLE {
                    continue;
                }
                self.dist[w] = next_dist;
                self.edge_to[w] = v;
                self.queue.push_back(w);
            }
        }

        self.nbuf = nbuf;
        Ok(())
    }

    /// Whether the last BFS run reached `v`.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_some()
    }

    /// BFS layer distance from the last source to `v`, or `None` if `v` was
    /// not reached (or no search has run).
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist.get(v).copied().filter(|&d| d != UNREACHABLE)
    }

    /// The shortest path from the last BFS source to `goal`.
    ///
    /// Returns `None` if `goal` was not reached.
    pub fn path_to(&self, goal: usize) -> Option<Path> {
        let source = self.source?;
        let dist = self.dist_to(goal)?;

        // Walk predecessor links back to the source.
        let mut vertices = Vec::with_capacity(dist + 1);
        let mut v = goal;
        while v != source {
            vertices.push(v);
            v = self.edge_to[v];
        }
        vertices.push(source);
        vertices.reverse();
        Some(Path::new(vertices))
    }

    /// Compute the shortest path (fewest edges) from `start` to `goal`.
    ///
    /// Fails with [`MazeError::NoPathFound`] when `goal` is unreachable and
    /// with [`MazeError::VertexOutOfRange`] for IDs outside the graph.
    pub fn shortest_path<P: Pather>(
        &mut self,
        pather: &P,
        start: usize,
        goal: usize,
    ) -> Result<Path, MazeError> {
        let count = pather.vertex_count();
        if goal >= count {
            return Err(MazeError::VertexOutOfRange { vertex: goal, count });
        }
        self.bfs(pather, start)?;
        self.path_to(goal)
            .ok_or(MazeError::NoPathFound { from: start, to: goal })
    }
}
