//! TerminalRenderer: presents framebuffers on the real terminal.
//!
//! Each frame is diffed against the one currently on screen and only the
//! dirty runs of cells are written. Encoding goes into a reusable byte buffer
//! first, so one frame costs a single `write_all` on stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Color, WINDOW_TITLE};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently visible on the terminal, if known.
    front: Option<FrameBuffer>,
    scratch: Vec<u8>,
    /// Whether key repeat/release reporting was pushed in `enter`.
    keyboard_enhanced: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            scratch: Vec::with_capacity(64 * 1024),
            keyboard_enhanced: false,
        }
    }

    /// Take over the terminal: raw mode, alternate screen, window title,
    /// hidden cursor.
    ///
    /// Where the terminal supports the keyboard enhancement protocol, key
    /// repeat and release events are switched on as well; see
    /// [`keyboard_enhanced`](Self::keyboard_enhanced).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // The query needs raw mode; a failed query means "unsupported".
        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.scratch.clear();
        self.scratch
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::SetTitle(WINDOW_TITLE))?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?;
        if self.keyboard_enhanced {
            self.scratch.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.write_scratch().context("failed to write to terminal")?;
        self.front = None;
        Ok(())
    }

    /// Give the terminal back. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        if std::mem::take(&mut self.keyboard_enhanced) {
            self.scratch.queue(PopKeyboardEnhancementFlags)?;
        }
        self.scratch
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        let written = self.write_scratch();
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        written
    }

    /// Whether the terminal reports key repeat and release events.
    ///
    /// Without them an OS autorepeat arrives as a plain press and a held key
    /// has to be inferred from a timeout.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Forget what is on screen so the next frame is drawn in full.
    ///
    /// Call this on terminal resize.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Present `fb`, then hand the previously presented buffer back through
    /// `fb` so the caller can render the next frame into it.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        let mut back = match self.front.take() {
            Some(front) if front.width() == fb.width() && front.height() == fb.height() => {
                encode_diff_into(&front, fb, &mut self.scratch)?;
                front
            }
            stale => {
                encode_full_into(fb, &mut self.scratch)?;
                stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()))
            }
        };
        self.write_scratch()?;

        std::mem::swap(&mut back, fb);
        self.front = Some(back);
        Ok(())
    }

    fn write_scratch(&mut self) -> Result<()> {
        self.stdout.write_all(&self.scratch)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues cells while only emitting style changes when the style differs
/// from the last one written.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full redraw of `fb` into `out` (no terminal I/O).
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut writer = CellWriter::new(out);
    for (y, row) in rows(fb) {
        writer.move_to(0, y)?;
        writer.cells(row)?;
    }
    writer.finish()
}

/// Encode only the cells of `next` that differ from `prev` (no terminal I/O).
///
/// Both buffers must have the same size; otherwise this falls back to a full
/// redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut writer = CellWriter::new(out);
    for ((y, old), (_, new)) in rows(prev).zip(rows(next)) {
        for (start, end) in dirty_runs(old, new) {
            writer.move_to(start as u16, y)?;
            writer.cells(&new[start..end])?;
        }
    }
    writer.finish()
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = (u16, &[Cell])> {
    (0..fb.height()).filter_map(move |y| fb.row(y).map(|row| (y, row)))
}

/// Half-open column ranges where `old` and `new` differ.
fn dirty_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = x + old[x..].iter().zip(&new[x..]).position(|(a, b)| a != b)?;
        let len = old[start..]
            .iter()
            .zip(&new[start..])
            .take_while(|(a, b)| a != b)
            .count();
        x = start + len;
        Some((start, x))
    })
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?
        .queue(SetForegroundColor(to_term_color(style.fg)))?
        .queue(SetBackgroundColor(to_term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
