use std::fmt;

/// An ordered sequence of vertex IDs from a start to a goal, both included.
///
/// Consecutive vertices are adjacent in the graph the path was computed on.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Vec<usize>", try_from = "Vec<usize>"))]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    /// Wrap a vertex sequence. `vertices` must not be empty.
    pub(crate) fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self { vertices }
    }

    /// Number of edges walked, i.e. one less than the vertex count.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Whether start and goal are the same vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.vertices[0]
    }

    #[inline]
    pub fn goal(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().copied()
    }

    /// Consecutive `(from, to)` steps along the path.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl From<Path> for Vec<usize> {
    fn from(p: Path) -> Self {
        p.vertices
    }
}

impl TryFrom<Vec<usize>> for Path {
    type Error = &'static str;

    fn try_from(vertices: Vec<usize>) -> Result<Self, Self::Error> {
        if vertices.is_empty() {
            return Err("a path holds at least one vertex");
        }
        Ok(Self { vertices })
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter().copied()
    }
}
