//! Geometry primitives: [`Cell`], [`Dims`] and [`Direction`].
//!
//! [`Dims`] owns the one bijection between grid cells and dense vertex IDs
//! (`row * cols + col`). Every other component goes through it.

use std::fmt;

use crate::error::MazeError;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid cell, 0-indexed. Row 0 is the bottom line of the drawing and rows
/// grow upwards; columns grow to the right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Origin (0, 0), the bottom-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal passages out of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in N, E, S, W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Offset as (Δrow, Δcol). North is towards increasing row index.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Dimensions of a maze grid. Both sides are at least 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDims"))]
pub struct Dims {
    rows: usize,
    cols: usize,
}

/// Unchecked mirror of [`Dims`] used to validate deserialized values.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    rows: usize,
    cols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for Dims {
    type Error = MazeError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        Dims::new(raw.rows, raw.cols)
    }
}

impl Dims {
    /// Smallest accepted number of rows or columns.
    pub const MIN_SIDE: usize = 2;

    /// Validate and create new dimensions.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either side is below
    /// [`MIN_SIDE`](Self::MIN_SIDE) or the cell count does not fit a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows < Self::MIN_SIDE || cols < Self::MIN_SIDE || rows.checked_mul(cols).is_none() {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells, i.e. the vertex count V.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`: valid dimensions hold at least four cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Vertex ID of a cell: `row * cols + col`.
    #[inline]
    pub const fn vertex_of(self, c: Cell) -> usize {
        c.row * self.cols + c.col
    }

    /// Row of a vertex ID.
    #[inline]
    pub const fn row_of(self, v: usize) -> usize {
        v / self.cols
    }

    /// Column of a vertex ID.
    #[inline]
    pub const fn col_of(self, v: usize) -> usize {
        v % self.cols
    }

    /// Cell of a vertex ID. The ID is not range checked.
    #[inline]
    pub const fn cell_of(self, v: usize) -> Cell {
        Cell::new(self.row_of(v), self.col_of(v))
    }

    /// The neighbour of `c` in direction `d`, or `None` if it falls outside
    /// the grid.
    pub fn neighbor(self, c: Cell, d: Direction) -> Option<Cell> {
        let (dr, dc) = d.delta();
        let row = c.row.checked_add_signed(dr)?;
        let col = c.col.checked_add_signed(dc)?;
        let n = Cell::new(row, col);
        self.contains(n).then_some(n)
    }

    /// Iterate over all cells in vertex-ID order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.len()).map(move |v| self.cell_of(v))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
