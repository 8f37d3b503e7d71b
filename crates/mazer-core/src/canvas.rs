//! A character canvas for drawing mazes, plus frame diffing.
//!
//! Renderers draw into a [`Canvas`]; back-ends either print it whole or
//! flush only the [`Frame`] of glyphs that changed since the previous one.

use std::fmt;

// ---------------------------------------------------------------------------
// Color / Glyph
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// The default / unset colour (0). Back-ends map it to the terminal's
    /// own foreground.
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// A coloured character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, fg: Color) -> Self {
        Self { ch, fg }
    }

    /// A glyph drawn in the default colour.
    #[inline]
    pub const fn plain(ch: char) -> Self {
        Self::new(ch, Color::DEFAULT)
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::plain(' ')
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A `width` x `height` grid of glyphs. (0, 0) is the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create a canvas filled with blanks.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            glyphs: vec![Glyph::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Glyph at (x, y); blank outside the canvas.
    pub fn at(&self, x: usize, y: usize) -> Glyph {
        self.index(x, y).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Iterate over every position and glyph, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Glyph)> + '_ {
        self.glyphs
            .iter()
            .enumerate()
            .map(|(i, g)| (i % self.width, i / self.width, *g))
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, line) in self.glyphs.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            let s: String = line.iter().map(|g| g.ch).collect();
            f.write_str(s.trim_end())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameGlyph / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between canvases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGlyph {
    pub x: usize,
    pub y: usize,
    pub glyph: Glyph,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub glyphs: Vec<FrameGlyph>,
    pub width: usize,
    pub height: usize,
}

impl Frame {
    /// A frame redrawing every glyph of `canvas`.
    pub fn full(canvas: &Canvas) -> Self {
        Self {
            glyphs: canvas
                .iter()
                .map(|(x, y, glyph)| FrameGlyph { x, y, glyph })
                .collect(),
            width: canvas.width(),
            height: canvas.height(),
        }
    }
}

/// Compute the difference between two same-sized canvases.
///
/// Returns a [`Frame`] containing only the glyphs that differ.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let glyphs = curr
        .iter()
        .filter(|&(x, y, g)| prev.at(x, y) != g)
        .map(|(x, y, glyph)| FrameGlyph { x, y, glyph })
        .collect();
    Frame {
        glyphs,
        width: curr.width(),
        height: curr.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_new_and_at() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.width(), 4);
        assert_eq!(c.height(), 3);
        assert_eq!(c.at(0, 0), Glyph::default());
    }

    #[test]
    fn canvas_set_and_get() {
        let mut c = Canvas::new(4, 3);
        c.set(2, 1, Glyph::plain('X'));
        assert_eq!(c.at(2, 1).ch, 'X');
        // out of bounds is ignored / blank
        c.set(10, 10, Glyph::plain('Y'));
        assert_eq!(c.at(10, 10), Glyph::default());
    }

    #[test]
    fn display_trims_trailing_blanks() {
        let mut c = Canvas::new(3, 2);
        c.set(0, 0, Glyph::plain('a'));
        c.set(1, 1, Glyph::plain('b'));
        assert_eq!(c.to_string(), "a\n b");
    }

    #[test]
    fn compute_frame_diff() {
        let a = Canvas::new(3, 2);
        let mut b = Canvas::new(3, 2);
        b.set(1, 0, Glyph::new('A', Color::from_rgb(255, 0, 0)));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.glyphs.len(), 1);
        assert_eq!((frame.glyphs[0].x, frame.glyphs[0].y), (1, 0));
        assert_eq!(frame.glyphs[0].glyph.ch, 'A');
        assert_eq!(frame.glyphs[0].glyph.fg.r(), 255);
    }

    #[test]
    fn full_frame_covers_canvas() {
        let c = Canvas::new(3, 2);
        assert_eq!(Frame::full(&c).glyphs.len(), 6);
    }
}
