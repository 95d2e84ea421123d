//! GameView: maps a `core::FrameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The game lives on a fixed 700×800 logical surface. The view letterboxes
//! that surface into whatever viewport the terminal offers, compensating for
//! terminal cells being roughly twice as tall as they are wide.

use crate::core::snapshot::FrameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, Phase, Rect, GAME_OVER_TEXT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the logical surface lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cols: u16,
    pub rows: u16,
    /// Logical units per column.
    unit_x: f32,
    /// Logical units per row.
    unit_y: f32,
}

impl Projection {
    /// Fit the logical surface into `viewport`; `None` if nothing fits.
    pub fn fit(viewport: Viewport, cell_aspect: f32, anchor_y: AnchorY) -> Option<Self> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }

        let sw = SCREEN_WIDTH as f32;
        let sh = SCREEN_HEIGHT as f32;
        // One column is `unit_x` wide, one row is `cell_aspect` columns tall.
        let unit_x = (sw / viewport.width as f32).max(sh / (viewport.height as f32 * cell_aspect));
        let unit_y = unit_x * cell_aspect;

        let cols = ((sw / unit_x).round() as u16).clamp(1, viewport.width);
        let rows = ((sh / unit_y).round() as u16).clamp(1, viewport.height);

        let origin_x = (viewport.width - cols) / 2;
        let origin_y = match anchor_y {
            AnchorY::Center => (viewport.height - rows) / 2,
            AnchorY::Top => 0,
        };

        Some(Self {
            origin_x,
            origin_y,
            cols,
            rows,
            unit_x,
            unit_y,
        })
    }

    /// Map a logical point to a cell (clamped into the play area).
    pub fn point(&self, x: f32, y: f32) -> (u16, u16) {
        let c = ((x / self.unit_x).floor().max(0.0) as u16).min(self.cols - 1);
        let r = ((y / self.unit_y).floor().max(0.0) as u16).min(self.rows - 1);
        (self.origin_x + c, self.origin_y + r)
    }

    /// Map a logical rectangle to a cell rectangle `(x, y, w, h)`.
    ///
    /// The rectangle is clipped to the surface first; anything visible covers
    /// at least one cell.
    pub fn rect(&self, r: Rect) -> Option<(u16, u16, u16, u16)> {
        let x0 = r.x.max(0.0);
        let y0 = r.y.max(0.0);
        let x1 = r.right().min(SCREEN_WIDTH as f32);
        let y1 = r.bottom().min(SCREEN_HEIGHT as f32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let c0 = ((x0 / self.unit_x).floor() as u16).min(self.cols - 1);
        let r0 = ((y0 / self.unit_y).floor() as u16).min(self.rows - 1);
        let c1 = ((x1 / self.unit_x).ceil() as u16).clamp(c0 + 1, self.cols);
        let r1 = ((y1 / self.unit_y).ceil() as u16).clamp(r0 + 1, self.rows);

        Some((self.origin_x + c0, self.origin_y + r0, c1 - c0, r1 - r0))
    }
}

/// Colours of the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub letterbox: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            letterbox: Color::new(30, 30, 40),
        }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Terminal cell height divided by width.
    cell_aspect: f32,
    anchor_y: AnchorY,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2.0 matches the typical terminal glyph aspect ratio.
        Self {
            cell_aspect: 2.0,
            anchor_y: AnchorY::Center,
            palette: Palette::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_aspect: f32) -> Self {
        Self {
            cell_aspect: if cell_aspect > 0.0 { cell_aspect } else { 2.0 },
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn projection(&self, viewport: Viewport) -> Option<Projection> {
        Projection::fit(viewport, self.cell_aspect, self.anchor_y)
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &FrameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let letterbox = CellStyle::new(self.palette.foreground, self.palette.letterbox);
        fb.clear(letterbox.into_cell(' '));

        let Some(proj) = self.projection(viewport) else {
            return;
        };

        let bg = CellStyle::new(self.palette.foreground, self.palette.background);
        fb.fill_rect(proj.origin_x, proj.origin_y, proj.cols, proj.rows, ' ', bg);

        match snap.phase {
            Phase::WaitingForStart => {}
            Phase::GameOver => self.draw_centered_text(fb, &proj, GAME_OVER_TEXT),
            Phase::Playing => {
                let solid = CellStyle::new(self.palette.foreground, self.palette.background);
                for cmd in snap.draw_list.iter() {
                    if let Some((x, y, w, h)) = proj.rect(cmd.rect) {
                        fb.fill_rect(x, y, w, h, '█', solid);
                    }
                }
                self.draw_score(fb, &proj, snap.score);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FrameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn text_style(&self) -> CellStyle {
        CellStyle::new(self.palette.foreground, self.palette.background).bold()
    }

    fn draw_score(&self, fb: &mut FrameBuffer, proj: &Projection, score: u32) {
        let (x, y) = proj.point(10.0, 10.0);
        let style = self.text_style();
        let x = fb.put_str(x, y, "Score: ", style);
        fb.put_u32(x, y, score, style);
    }

    fn draw_centered_text(&self, fb: &mut FrameBuffer, proj: &Projection, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = proj.origin_x + proj.cols.saturating_sub(text_w) / 2;
        let y = proj.origin_y + proj.rows / 2;
        fb.put_str(x, y, text, self.text_style());
    }
}
