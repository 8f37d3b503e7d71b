//! [`GridGraph`]: undirected passage graph over the cells of a grid.
//!
//! Vertices are the dense IDs defined by [`Dims`]; an edge between two
//! vertices means there is no wall between the two cells. The generator is
//! responsible for only joining grid-adjacent cells.

use std::fmt;

use crate::error::MazeError;
use crate::geom::{Cell, Dims};

/// An undirected graph on `rows * cols` vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "GraphRepr", try_from = "GraphRepr"))]
pub struct GridGraph {
    dims: Dims,
    adj: Vec<Vec<usize>>,
    // insertion order, each undirected edge once
    edges: Vec<(usize, usize)>,
}

impl GridGraph {
    /// Create a graph with `rows * cols` vertices and no edges.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        Ok(Self::with_dims(Dims::new(rows, cols)?))
    }

    /// Create an edgeless graph for already validated dimensions.
    pub fn with_dims(dims: Dims) -> Self {
        Self {
            dims,
            adj: vec![Vec::new(); dims.len()],
            edges: Vec::with_capacity(dims.len().saturating_sub(1)),
        }
    }

    /// Record an undirected passage between `u` and `v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), MazeError> {
        let count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= count {
                return Err(MazeError::VertexOutOfRange { vertex, count });
            }
        }
        if u == v {
            return Err(MazeError::SelfLoop { vertex: u });
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges.push((u, v));
        Ok(())
    }

    /// Neighbours of `v` in the order their edges were added.
    ///
    /// The iterator borrows the graph and can be re-created at will; an
    /// out-of-range `v` yields nothing.
    pub fn adj(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj.get(v).into_iter().flatten().copied()
    }

    /// Whether an edge joins `u` and `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj(u).any(|w| w == v)
    }

    /// Whether the passage between two cells is open.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        self.dims.contains(a)
            && self.dims.contains(b)
            && self.has_edge(self.dims.vertex_of(a), self.dims.vertex_of(b))
    }

    /// Every undirected edge once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of neighbours of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adj.get(v).map_or(0, Vec::len)
    }
}

impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for (v, list) in self.adj.iter().enumerate() {
            write!(f, "\n{v}:")?;
            for w in list {
                write!(f, " {w}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// `{ rows, cols, edges }`; deserializing replays `add_edge` so malformed
/// input is rejected.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphRepr {
    rows: usize,
    cols: usize,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl From<GridGraph> for GraphRepr {
    fn from(g: GridGraph) -> Self {
        Self {
            rows: g.dims.rows(),
            cols: g.dims.cols(),
            edges: g.edges,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for GridGraph {
    type Error = MazeError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        let mut g = GridGraph::new(repr.rows, repr.cols)?;
        for (u, v) in repr.edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_edgeless() {
        let g = GridGraph::new(3, 4).unwrap();
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.adj(5).count(), 0);
    }

    #[test]
    fn new_rejects_thin_grid() {
        assert_eq!(
            GridGraph::new(1, 5),
            Err(MazeError::InvalidDimension { rows: 1, cols: 5 })
        );
    }

    #[test]
    fn adj_keeps_insertion_order_and_restarts() {
        let mut g = GridGraph::new(2, 2).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let first: Vec<usize> = g.adj(1).collect();
        let again: Vec<usize> = g.adj(1).collect();
        assert_eq!(first, vec![3, 0, 2]);
        assert_eq!(first, again);
        assert_eq!(g.adj(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.degree(1), 3);
    }

    #[test]
    fn edges_are_undirected() {
        let mut g = GridGraph::new(2, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 1));
        assert!(g.is_open(Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!g.is_open(Cell::new(0, 0), Cell::new(5, 0)));
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2)]);
    }

    #[test]
    fn add_edge_rejects_bad_vertices() {
        let mut g = GridGraph::new(2, 2).unwrap();
        assert_eq!(
            g.add_edge(0, 4),
            Err(MazeError::VertexOutOfRange { vertex: 4, count: 4 })
        );
        assert_eq!(g.add_edge(2, 2), Err(MazeError::SelfLoop { vertex: 2 }));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn out_of_range_adj_is_empty() {
        let g = GridGraph::new(2, 2).unwrap();
        assert_eq!(g.adj(99).count(), 0);
        assert_eq!(g.degree(99), 0);
    }

    #[test]
    fn display_dumps_adjacency() {
        let mut g = GridGraph::new(2, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(
            g.to_string(),
            "4 vertices, 3 edges\n0: 1\n1: 0 3 2\n2: 1\n3: 1"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn graph_round_trip() {
        let mut g = GridGraph::new(2, 3).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 4).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":3,"edges":[[0,1],[1,4]]}"#);
        let back: GridGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn malformed_graph_is_rejected() {
        let bad = r#"{"rows":2,"cols":2,"edges":[[0,7]]}"#;
        assert!(serde_json::from_str::<GridGraph>(bad).is_err());
        let thin = r#"{"rows":1,"cols":2,"edges":[]}"#;
        assert!(serde_json::from_str::<GridGraph>(thin).is_err());
    }

    #[test]
    fn dims_and_cell_round_trip() {
        let d = Dims::new(4, 6).unwrap();
        let back: Dims = serde_json::from_str(&serde_json::to_string(&d).unwrap()).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Dims>(r#"{"rows":0,"cols":6}"#).is_err());
        let c = Cell::new(3, 1);
        let back: Cell = serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
