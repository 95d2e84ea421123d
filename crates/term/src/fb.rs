//! Framebuffer and style types for terminal rendering.
//!
//! The buffer is row-major. Every write is clipped against the buffer once,
//! then lands on a row slice, so drawing off the edge is never an error.

use std::ops::Range;

use crate::types::Color;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Color::new(220, 220, 220), Color::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// 2D grid of styled character cells, addressed as `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions, keeping the allocation when it is big enough.
    ///
    /// Cell contents are unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) != (width, height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::default());
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, or `None` below the last row.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        self.row_span(y).map(|span| &self.cells[span])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        self.row_span(y).map(move |span| &mut self.cells[span])
    }

    fn row_span(&self, y: u16) -> Option<Range<usize>> {
        (y < self.height).then(|| {
            let start = y as usize * self.width as usize;
            start..start + self.width as usize
        })
    }

    /// Columns `[x, x + w)` clipped to the buffer width.
    fn col_span(&self, x: u16, w: u16) -> Range<usize> {
        let start = x.min(self.width) as usize;
        let end = x.saturating_add(w).min(self.width) as usize;
        start..end
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write a string starting at `(x, y)`, clipped at the right edge.
    ///
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let cols = self.col_span(x, u16::MAX);
        let Some(row) = self.row_mut(y) else {
            return x;
        };
        let mut written = 0u16;
        for (slot, ch) in row[cols].iter_mut().zip(s.chars()) {
            *slot = style.into_cell(ch);
            written += 1;
        }
        x + written
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        // u32::MAX has 10 digits.
        let mut digits = [0u8; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        // ASCII digits are valid UTF-8.
        let text = std::str::from_utf8(&digits[start..]).unwrap_or("");
        self.put_str(x, y, text, style)
    }

    /// Fill a `w`×`h` block at `(x, y)` with `ch`; the part outside the
    /// buffer is dropped.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let cols = self.col_span(x, w);
        if cols.is_empty() {
            return;
        }
        let cell = style.into_cell(ch);
        let rows = y..y.saturating_add(h).min(self.height);
        for ry in rows {
            if let Some(row) = self.row_mut(ry) {
                row[cols.clone()].fill(cell);
            }
        }
    }

    /// Collect one row into a string (test and debugging helper).
    pub fn row_string(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
