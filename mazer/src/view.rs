//! Text rendering of a maze and its solution.
//!
//! Each cell is four characters wide and two lines high, corners are `+`,
//! walls are `---` and `|`. Row 0 is drawn at the bottom, like a plot with
//! the origin in the lower-left corner:
//!
//! ```text
//! +---+---+
//! |     G |
//! +---+ * +
//! | S**** |
//! +---+---+
//! ```

use mazer_core::{Canvas, Cell, Color, Dims, Direction, Glyph, GridGraph};
use mazer_paths::Path;

use crate::orchestrator::SolvedMaze;

pub const WALL_COLOR: Color = Color::DEFAULT;
pub const PATH_COLOR: Color = Color::from_rgb(220, 50, 50);
pub const ENDPOINT_COLOR: Color = Color::from_rgb(60, 120, 255);
pub const GRID_COLOR: Color = Color::from_rgb(0, 170, 170);

const CORNER: char = '+';
const H_WALL: char = '-';
const V_WALL: char = '|';
const GRID: char = '.';
const TRAIL: char = '*';
const START_MARK: char = 'S';
const GOAL_MARK: char = 'G';

/// Draws a [`GridGraph`] and paths through it onto [`Canvas`]es.
pub struct MazeView<'a> {
    graph: &'a GridGraph,
    dims: Dims,
    grid: bool,
}

impl<'a> MazeView<'a> {
    pub fn new(graph: &'a GridGraph) -> Self {
        Self {
            graph,
            dims: graph.dims(),
            grid: false,
        }
    }

    /// Also outline every cell, marking opened walls with cyan dots.
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Canvas size in characters, as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (4 * self.dims.cols() + 1, 2 * self.dims.rows() + 1)
    }

    /// Canvas position of the centre of a cell.
    fn center(&self, c: Cell) -> (usize, usize) {
        (4 * c.col + 2, 2 * (self.dims.rows() - 1 - c.row) + 1)
    }

    /// Walls of every cell, omitted wherever the graph has a passage unless
    /// the grid is on.
    pub fn draw_walls(&self) -> Canvas {
        let (w, h) = self.size();
        let mut canvas = Canvas::new(w, h);
        let wall = |ch| Glyph::new(ch, WALL_COLOR);
        let grid = Glyph::new(GRID, GRID_COLOR);

        for y in (0..h).step_by(2) {
            for x in (0..w).step_by(4) {
                canvas.set(x, y, wall(CORNER));
            }
        }

        for cell in self.dims.cells() {
            let (cx, cy) = self.center(cell);
            for dir in Direction::ALL {
                let open = self
                    .dims
                    .neighbor(cell, dir)
                    .is_some_and(|n| self.graph.is_open(cell, n));
                let (h_side, v_side) = match (open, self.grid) {
                    (false, _) => (wall(H_WALL), wall(V_WALL)),
                    (true, true) => (grid, grid),
                    (true, false) => continue,
                };
                match dir {
                    Direction::North | Direction::South => {
                        let y = if dir == Direction::North { cy - 1 } else { cy + 1 };
                        for x in cx - 1..=cx + 1 {
                            canvas.set(x, y, h_side);
                        }
                    }
                    Direction::East => canvas.set(cx + 2, cy, v_side),
                    Direction::West => canvas.set(cx - 2, cy, v_side),
                }
            }
        }
        canvas
    }

    /// Mark the start and goal cells.
    pub fn draw_endpoints(&self, canvas: &mut Canvas, start: usize, goal: usize) {
        let (sx, sy) = self.center(self.dims.cell_of(start));
        canvas.set(sx, sy, Glyph::new(START_MARK, ENDPOINT_COLOR));
        let (gx, gy) = self.center(self.dims.cell_of(goal));
        canvas.set(gx, gy, Glyph::new(GOAL_MARK, ENDPOINT_COLOR));
    }

    /// Draw one path step: the trail between the two cell centres and the
    /// `to` cell itself unless it carries an endpoint mark.
    pub fn draw_step(&self, canvas: &mut Canvas, from: usize, to: usize) {
        let trail = Glyph::new(TRAIL, PATH_COLOR);
        let (fx, fy) = self.center(self.dims.cell_of(from));
        let (tx, ty) = self.center(self.dims.cell_of(to));

        if fy == ty {
            for x in fx.min(tx) + 1..fx.max(tx) {
                canvas.set(x, fy, trail);
            }
        } else if fx == tx {
            for y in fy.min(ty) + 1..fy.max(ty) {
                canvas.set(fx, y, trail);
            }
        }

        let mark = canvas.at(tx, ty).ch;
        if mark != START_MARK && mark != GOAL_MARK {
            canvas.set(tx, ty, trail);
        }
    }

    /// Walls plus endpoint marks: the picture before the path is revealed.
    pub fn base(&self, start: usize, goal: usize) -> Canvas {
        let mut canvas = self.draw_walls();
        self.draw_endpoints(&mut canvas, start, goal);
        canvas
    }

    /// The complete picture with the whole path drawn.
    pub fn render(&self, path: &Path) -> Canvas {
        let mut canvas = self.base(path.start(), path.goal());
        for (from, to) in path.steps() {
            self.draw_step(&mut canvas, from, to);
        }
        canvas
    }

    /// The picture after each successive path step, starting from
    /// [`base`](Self::base). The last item equals [`render`](Self::render).
    pub fn path_steps<'p>(&'p self, path: &'p Path) -> impl Iterator<Item = Canvas> + 'p {
        let mut canvas = self.base(path.start(), path.goal());
        path.steps().map(move |(from, to)| {
            self.draw_step(&mut canvas, from, to);
            canvas.clone()
        })
    }
}

/// Render a solved maze to text, with the cell grid if `grid` is set.
pub fn render_solved(solved: &SolvedMaze, grid: bool) -> Canvas {
    MazeView::new(&solved.graph).with_grid(grid).render(&solved.path)
}
