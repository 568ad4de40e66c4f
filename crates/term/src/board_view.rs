//! BoardView: maps the pixel layout onto a character-cell framebuffer.
//!
//! Layout positions are pixels (41x51 tile pitch). Each tile becomes a
//! 4x2 block of cells, so one pixel column maps to `4/41` of a cell. Stacked
//! tiles land where their pixel offset rounds to, which usually shifts them
//! one column left of the tile below.

use anyhow::Result;

use crate::core::{GameSnapshot, GameStatus, TileSnapshot};
use crate::engine::surface::{paint, Marker, RenderSurface};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Suit, TileFace, TILE_HEIGHT, TILE_WIDTH};

/// Top-left pixel of the standard layouts, including stacked offsets.
pub const LAYOUT_ORIGIN: (i32, i32) = (114, 97);

const PANEL_WIDTH: u16 = 28;
const PANEL_GAP: u16 = 2;

const BORDER: Rgb = Rgb::new(120, 110, 90);
const FRAME_BG: Rgb = Rgb::new(16, 40, 28);
const TILE_BG: Rgb = Rgb::new(200, 190, 160);
const LABEL: Rgb = Rgb::new(200, 200, 200);
const VALUE: Rgb = Rgb::new(255, 255, 255);

/// Terminal size in cells.
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

/// Top-left cell of the board frame within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    cell_w: u16,
    cell_h: u16,
    origin: (i32, i32),
    cols: u16,
    rows: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 15 pitches wide, 8 tall.
        Self::new(4, 2, LAYOUT_ORIGIN, 60, 16)
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16, origin: (i32, i32), cols: u16, rows: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            origin,
            cols,
            rows,
        }
    }

    /// Size of the bordered board frame in cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (self.cols + 2, self.rows + 2)
    }

    /// Center the frame and side panel in the viewport.
    pub fn place(&self, viewport: Viewport) -> Placement {
        let (fw, fh) = self.frame_size();
        let total_w = fw + PANEL_GAP + PANEL_WIDTH;
        Placement {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(fh) / 2,
        }
    }

    /// Cell offset inside the frame for a layout pixel, if it fits.
    pub fn tile_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let col = (x - self.origin.0) * self.cell_w as i32;
        let row = (y - self.origin.1) * self.cell_h as i32;
        let col = col.div_euclid(TILE_WIDTH);
        let row = row.div_euclid(TILE_HEIGHT);
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as u16, row as u16);
        if col + self.cell_w > self.cols || row + self.cell_h > self.rows {
            return None;
        }
        Some((col, row))
    }

    fn screen_cell(&self, at: Placement, x: i32, y: i32) -> Option<(u16, u16)> {
        self.tile_cell(x, y)
            .map(|(c, r)| (at.x + 1 + c, at.y + 1 + r))
    }

    pub fn draw_frame(&self, fb: &mut FrameBuffer, at: Placement) {
        let (fw, fh) = self.frame_size();
        let border = CellStyle::new(BORDER, FRAME_BG);
        fb.fill_rect(at.x, at.y, fw, fh, ' ', CellStyle::new(LABEL, FRAME_BG));

        let right = at.x + fw - 1;
        let bottom = at.y + fh - 1;
        for x in at.x + 1..right {
            fb.put_char(x, at.y, '─', border);
            fb.put_char(x, bottom, '─', border);
        }
        for y in at.y + 1..bottom {
            fb.put_char(at.x, y, '│', border);
            fb.put_char(right, y, '│', border);
        }
        fb.put_char(at.x, at.y, '┌', border);
        fb.put_char(right, at.y, '┐', border);
        fb.put_char(at.x, bottom, '└', border);
        fb.put_char(right, bottom, '┘', border);
    }

    /// Draw one tile block. Higher layers are lighter; blocked tiles are dim.
    pub fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        at: Placement,
        face: TileFace,
        x: i32,
        y: i32,
        layer: u32,
        removable: bool,
    ) {
        let Some((cx, cy)) = self.screen_cell(at, x, y) else {
            return;
        };
        let bg = TILE_BG.lighten((layer.min(4) * 12) as u8);
        let mut style = CellStyle::new(suit_color(face.suit), bg);
        if removable {
            style = style.bold();
        } else {
            style = style.dim();
        }

        fb.fill_rect(cx, cy, self.cell_w, self.cell_h, ' ', style);
        fb.put_str(cx + 1, cy, &face.label(), style);
        // Shadow edge on the right shows the stack depth.
        let edge = CellStyle::new(bg, Rgb::new(90, 80, 60));
        let shade = if layer > 0 { '▌' } else { '▏' };
        for dy in 0..self.cell_h {
            fb.put_char(cx + self.cell_w - 1, cy + dy, shade, edge);
        }
    }

    pub fn draw_marker(&self, fb: &mut FrameBuffer, at: Placement, marker: Marker, x: i32, y: i32) {
        let Some((cx, cy)) = self.screen_cell(at, x, y) else {
            return;
        };
        let (w, h) = (self.cell_w, self.cell_h);
        match marker {
            Marker::Cursor => fb.restyle_rect(cx, cy, w, h, |s| CellStyle {
                fg: s.bg,
                bg: s.fg,
                bold: true,
                dim: false,
            }),
            Marker::Pick => fb.restyle_rect(cx, cy, w, h, |s| CellStyle {
                bg: Rgb::new(240, 200, 60),
                ..s
            }),
            Marker::Hint => fb.restyle_rect(cx, cy, w, h, |s| CellStyle {
                bg: Rgb::new(110, 210, 120),
                ..s
            }),
        }
    }

    /// Score, tile count, turn, prompt, latest message and key help.
    pub fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        at: Placement,
        snap: &GameSnapshot,
        message: Option<&str>,
    ) {
        let (fw, _) = self.frame_size();
        let px = at.x + fw + PANEL_GAP;
        let label = CellStyle::new(LABEL, Rgb::default());
        let value = CellStyle::new(VALUE, Rgb::default()).bold();
        let mut y = at.y;

        fb.put_str(px, y, "MAHJONG", value);
        y += 2;

        if let Some(difficulty) = snap.difficulty {
            fb.put_str(px, y, "LEVEL", label);
            fb.put_str(px + 8, y, difficulty.as_str(), value);
            y += 1;
        }
        for (name, n) in [
            ("SCORE", snap.score),
            ("TILES", snap.remaining as u32),
            ("TURN", snap.turn),
        ] {
            fb.put_str(px, y, name, label);
            fb.put_u32(px + 8, y, n, value);
            y += 1;
        }
        y += 1;

        let prompt = match (snap.status, snap.picks.len()) {
            (GameStatus::Playing, 0) => "Select the first tile.",
            (GameStatus::Playing, _) => "Select the second tile.",
            _ => "Game over.",
        };
        fb.put_str(px, y, prompt, label);
        y += 2;

        if let Some(text) = message {
            for line in wrap(text, PANEL_WIDTH as usize) {
                fb.put_str(px, y, &line, value);
                y += 1;
            }
            y += 1;
        }

        for help in ["arrows/hjkl move", "enter select", "? hint", "esc quit"] {
            fb.put_str(px, y, help, CellStyle::new(LABEL, Rgb::default()).dim());
            y += 1;
        }
    }

    /// Centered banner over the board for finished games.
    pub fn draw_overlay(&self, fb: &mut FrameBuffer, at: Placement, status: GameStatus) {
        let title = match status {
            GameStatus::Playing => return,
            GameStatus::Cleared => "BOARD CLEARED",
            GameStatus::Stuck => "NO MORE MOVES",
            GameStatus::Abandoned => "GAME ABANDONED",
        };
        let hint = "enter: new game  esc: quit";
        let (fw, fh) = self.frame_size();
        let w = (hint.len() as u16 + 4).min(fw);
        let x = at.x + fw.saturating_sub(w) / 2;
        let y = (at.y + fh / 2).saturating_sub(2);
        let style = CellStyle::new(VALUE, Rgb::new(30, 30, 30)).bold();
        fb.fill_rect(x, y, w, 4, ' ', style);
        let tx = x + w.saturating_sub(title.len() as u16) / 2;
        fb.put_str(tx, y + 1, title, style);
        fb.put_str(x + 2, y + 2, hint, CellStyle::new(LABEL, Rgb::new(30, 30, 30)));
    }

    /// Render a whole snapshot into a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> Result<FrameBuffer> {
        let mut surface = FrameSurface::new(*self, viewport);
        paint(&mut surface, snap, message)?;
        Ok(surface.into_frame())
    }
}

fn suit_color(suit: Suit) -> Rgb {
    match suit {
        Suit::Character => Rgb::new(180, 30, 30),
        Suit::Circle => Rgb::new(30, 70, 170),
        Suit::Bamboo => Rgb::new(20, 120, 50),
        Suit::Wind => Rgb::new(40, 40, 40),
        Suit::Dragon => Rgb::new(170, 90, 0),
        Suit::Flower => Rgb::new(160, 40, 130),
        Suit::Season => Rgb::new(110, 80, 10),
    }
}

/// Greedy word wrap; words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
        while line.len() > width {
            let rest = line.split_off(width);
            lines.push(std::mem::replace(&mut line, rest));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// In-memory [`RenderSurface`] drawing into a framebuffer.
#[derive(Debug, Clone)]
pub struct FrameSurface {
    view: BoardView,
    viewport: Viewport,
    at: Placement,
    fb: FrameBuffer,
}

impl FrameSurface {
    pub fn new(view: BoardView, viewport: Viewport) -> Self {
        Self {
            view,
            viewport,
            at: view.place(viewport),
            fb: FrameBuffer::new(viewport.width, viewport.height),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn into_frame(self) -> FrameBuffer {
        self.fb
    }
}

impl RenderSurface for FrameSurface {
    fn clear(&mut self) -> Result<()> {
        self.fb.resize(self.viewport.width, self.viewport.height);
        self.fb.clear(Cell::default());
        self.at = self.view.place(self.viewport);
        self.view.draw_frame(&mut self.fb, self.at);
        Ok(())
    }

    fn draw_tile(&mut self, face: TileFace, x: i32, y: i32) -> Result<()> {
        self.view.draw_tile(&mut self.fb, self.at, face, x, y, 0, true);
        Ok(())
    }

    fn draw_stacked(&mut self, tile: &TileSnapshot) -> Result<()> {
        self.view.draw_tile(
            &mut self.fb,
            self.at,
            tile.face,
            tile.x,
            tile.y,
            tile.layer,
            tile.removable,
        );
        Ok(())
    }

    fn draw_marker(&mut self, marker: Marker, x: i32, y: i32) -> Result<()> {
        self.view.draw_marker(&mut self.fb, self.at, marker, x, y);
        Ok(())
    }

    fn draw_status(&mut self, snapshot: &GameSnapshot, message: Option<&str>) -> Result<()> {
        self.view.draw_side_panel(&mut self.fb, self.at, snapshot, message);
        self.view.draw_overlay(&mut self.fb, self.at, snapshot.status);
        Ok(())
    }
}
