use std::collections::VecDeque;

/// Sentinel meaning "not reached" in BFS distance maps and predecessor links.
pub const UNREACHABLE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a graph of `len` vertices.
///
/// `PathFinder` owns all internal caches (BFS distances, predecessor links,
/// the frontier queue, component labels) so that repeated queries incur no
/// allocations after the first use. A BFS run stays queryable through
/// [`has_path_to`](Self::has_path_to), [`dist_to`](Self::dist_to) and
/// [`path_to`](Self::path_to) until the next run.
pub struct PathFinder {
    pub(crate) len: usize,
    // BFS caches
    pub(crate) source: Option<usize>,
    pub(crate) dist: Vec<usize>,
    pub(crate) edge_to: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    // CC caches
    pub(crate) cc_labels: Vec<i32>,
    pub(crate) cc_stack: Vec<usize>,
    pub(crate) cc_count: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<usize>,
}

impl PathFinder {
    /// Create a new `PathFinder` for graphs with `len` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            source: None,
            dist: vec![UNREACHABLE; len],
            edge_to: vec![UNREACHABLE; len],
            queue: VecDeque::new(),
            cc_labels: vec![-1; len],
            cc_stack: Vec::new(),
            cc_count: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Resize for graphs with `len` vertices, forgetting previous results.
    ///
    /// Buffers only grow; shrinking keeps their capacity.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.source = None;
        self.cc_count = 0;

        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
        self.edge_to.clear();
        self.edge_to.resize(len, UNREACHABLE);
        self.queue.clear();

        self.cc_labels.clear();
        self.cc_labels.resize(len, -1);
        self.cc_stack.clear();
    }

    /// Number of vertices the caches are sized for.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
