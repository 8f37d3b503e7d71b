//! Crossterm terminal back-end for mazer.
//!
//! Provides a [`TermAnimator`] that draws a [`Canvas`] on the alternate
//! screen and then reveals a sequence of canvases one diff [`Frame`] at a
//! time, pausing between steps.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{self, Color as CtColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::warn;

use mazer_core::{Canvas, Color, Frame, compute_frame};

/// Pause between two path steps unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Maps a [`mazer_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Queue the glyphs of `frame` on `out` and flush.
///
/// Glyphs beyond the `u16` range of terminal coordinates are skipped.
pub fn write_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    let mut fg = None;
    for fc in &frame.glyphs {
        let (Ok(x), Ok(y)) = (u16::try_from(fc.x), u16::try_from(fc.y)) else {
            continue;
        };
        let glyph = fc.glyph;

        queue!(out, cursor::MoveTo(x, y))?;
        // Only switch colours when they change.
        if fg != Some(glyph.fg) {
            queue!(out, SetForegroundColor(to_ct_color(glyph.fg)))?;
            fg = Some(glyph.fg);
        }
        queue!(out, style::Print(glyph.ch))?;
    }
    queue!(out, style::ResetColor)?;
    out.flush()
}

/// A terminal animator using crossterm.
pub struct TermAnimator<W: Write = Stdout> {
    out: W,
    delay: Duration,
    hold: Option<Duration>,
}

impl TermAnimator<Stdout> {
    /// Create an animator writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TermAnimator<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermAnimator<W> {
    /// Create an animator writing to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            delay: DEFAULT_DELAY,
            hold: None,
        }
    }

    /// Pause between two frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// How long the final picture stays up. `None` waits for a key press.
    pub fn with_hold(mut self, hold: Option<Duration>) -> Self {
        self.hold = hold;
        self
    }

    /// Switch the terminal to raw mode on the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    /// Draw the changes of one frame.
    pub fn flush(&mut self, frame: &Frame) -> io::Result<()> {
        write_frame(&mut self.out, frame)
    }

    /// Restore the terminal. Errors are ignored.
    pub fn close(&mut self) {
        let _ = execute!(self.out, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    /// Draw `base`, then each canvas of `steps` in turn, and hold the last
    /// picture. The terminal is restored on every exit path.
    pub fn play<I>(&mut self, base: &Canvas, steps: I) -> io::Result<()>
    where
        I: IntoIterator<Item = Canvas>,
    {
        if let Ok((w, h)) = terminal::size() {
            if base.width() > w as usize || base.height() > h as usize {
                warn!(
                    "maze needs {}x{} characters but the terminal is {w}x{h}",
                    base.width(),
                    base.height()
                );
            }
        }

        self.init()?;
        let res = self.run(base, steps);
        self.close();
        res
    }

    fn run<I>(&mut self, base: &Canvas, steps: I) -> io::Result<()>
    where
        I: IntoIterator<Item = Canvas>,
    {
        self.flush(&Frame::full(base))?;
        let mut prev = base.clone();
        for canvas in steps {
            if key_pressed(self.delay)? {
                return Ok(());
            }
            self.flush(&compute_frame(&prev, &canvas))?;
            prev = canvas;
        }
        self.wait()
    }

    /// Hold the final picture.
    fn wait(&mut self) -> io::Result<()> {
        match self.hold {
            Some(hold) => {
                key_pressed(hold)?;
            }
            None => loop {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press {
                        break;
                    }
                }
            },
        }
        Ok(())
    }
}

/// Wait up to `timeout` for a key press. Returns `true` if one arrived.
fn key_pressed(timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Ok(false);
        }
        if !event::poll(left)? {
            return Ok(false);
        }
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press {
                return Ok(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mazer_core::{FrameGlyph, Glyph};

    use super::*;

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn write_frame_prints_glyphs() {
        let frame = Frame {
            glyphs: vec![
                FrameGlyph { x: 0, y: 0, glyph: Glyph::plain('+') },
                FrameGlyph { x: 2, y: 1, glyph: Glyph::new('*', Color::from_rgb(200, 0, 0)) },
            ],
            width: 3,
            height: 2,
        };
        let mut out = Vec::new();
        write_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('+'));
        assert!(text.contains('*'));
        // MoveTo is 1-based in the escape sequence.
        assert!(text.contains("\x1b[2;3H"));
    }

    #[test]
    fn write_frame_skips_unaddressable_glyphs() {
        let frame = Frame {
            glyphs: vec![
                FrameGlyph { x: 65538, y: 0, glyph: Glyph::plain('#') },
                FrameGlyph { x: 1, y: 70000, glyph: Glyph::plain('#') },
                FrameGlyph { x: 4, y: 0, glyph: Glyph::plain('+') },
            ],
            width: 65539,
            height: 70001,
        };
        let mut out = Vec::new();
        write_frame(&mut out, &frame).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('#'));
        assert!(!text.contains("\x1b[1;3H"));
        assert!(text.contains("\x1b[1;5H"));
        assert!(text.contains('+'));
    }

    #[test]
    fn builder_sets_timing() {
        let anim = TermAnimator::with_writer(Vec::new());
        assert_eq!((anim.delay, anim.hold), (DEFAULT_DELAY, None));
        let anim = anim
            .with_delay(Duration::ZERO)
            .with_hold(Some(Duration::from_secs(2)));
        assert_eq!(anim.delay, Duration::ZERO);
        assert_eq!(anim.hold, Some(Duration::from_secs(2)));
    }

    #[test]
    fn empty_frame_writes_only_reset() {
        let mut out = Vec::new();
        write_frame(&mut out, &Frame::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('+'));
    }
}
