use mazer_core::GridGraph;

/// Minimal search interface — vertex count and neighbour enumeration.
pub trait Pather {
    /// Number of vertices; valid IDs are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Append neighbours of `v` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, v: usize, buf: &mut Vec<usize>);
}

impl Pather for GridGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        GridGraph::vertex_count(self)
    }

    #[inline]
    fn neighbors(&self, v: usize, buf: &mut Vec<usize>) {
        buf.extend(self.adj(v));
    }
}
