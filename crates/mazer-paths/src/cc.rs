//! Connected-component labelling.

use mazer_core::GridGraph;

use crate::PathFinder;
use crate::traits::Pather;

impl PathFinder {
    /// Label every vertex with a connected-component ID.
    ///
    /// Two vertices belong to the same component if there is a path of
    /// neighbours (as defined by `pather`) between them. After this call
    /// use [`cc_at`](Self::cc_at) to query the label of a given vertex.
    /// Returns the number of components.
    pub fn cc_map_all<P: Pather>(&mut self, pather: &P) -> usize {
        let len = pather.vertex_count();
        if len != self.len {
            self.set_len(len);
        }
        // Reset labels.
        self.cc_labels.fill(-1);

        let mut label: i32 = 0;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for start in 0..len {
            if self.cc_labels[start] >= 0 {
                continue;
            }

            // Iterative DFS from `start`.
            self.cc_stack.clear();
            self.cc_stack.push(start);
            self.cc_labels[start] = label;

            while let Some(v) = self.cc_stack.pop() {
                nbuf.clear();
                pather.neighbors(v, &mut nbuf);

                for &w in nbuf.iter() {
                    if w < len && self.cc_labels[w] < 0 {
                        self.cc_labels[w] = label;
                        self.cc_stack.push(w);
                    }
                }
            }

            label += 1;
        }

        self.nbuf = nbuf;
        self.cc_count = label as usize;
        self.cc_count
    }

    /// Connected-component label of `v` from the last
    /// [`cc_map_all`](Self::cc_map_all) call.
    pub fn cc_at(&self, v: usize) -> Option<usize> {
        let label = *self.cc_labels.get(v)?;
        if label < 0 {
            None
        } else {
            Some(label as usize)
        }
    }

    /// Number of components found by the last labelling.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.cc_count
    }

    /// Whether `graph` is a perfect maze: `V - 1` edges and a single
    /// component, hence a spanning tree.
    pub fn is_perfect_maze(&mut self, graph: &GridGraph) -> bool {
        graph.edge_count() + 1 == graph.vertex_count() && self.cc_map_all(graph) == 1
    }
}
