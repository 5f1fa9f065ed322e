//! In-crate [`Surface`] implementations: a recorder of draw calls and a
//! character-grid canvas for terminal output.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::font::{DisplayFont, FontKind};
use crate::geometry::{Bounds, Position, Rgb};
use crate::surface::Surface;

/// Text drawn on a [`RecordingSurface`], with the state it was drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub at: Position,
    pub color: Rgb,
    pub font_name: String,
    pub font_kind: FontKind,
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { bounds: Bounds, color: Rgb },
    SetColor(Rgb),
    Text(DrawnText),
}

/// Surface that records every call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    color: Rgb,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            color: Rgb::BLACK,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All text draws, in order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawnText> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// The most recent draw of exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<&DrawnText> {
        self.texts().filter(|t| t.text == text).last()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        self.ops.push(DrawOp::FillRect { bounds, color });
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.ops.push(DrawOp::SetColor(color));
    }

    fn draw_text(&mut self, text: &str, at: Position, font: &DisplayFont) {
        self.ops.push(DrawOp::Text(DrawnText {
            text: text.to_string(),
            at,
            color: self.color,
            font_name: font.name().to_string(),
            font_kind: font.kind(),
        }));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Rgb::BLACK,
};

/// Character grid covering `width × height` surface pixels, one cell per
/// `cell_w × cell_h` pixels.
///
/// Text lands in the row holding the pixel just above its baseline, one cell
/// per character starting at the cell containing the anchor. Anything outside
/// the grid is clipped.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cell_w: i32,
    cell_h: i32,
    cells: Vec<Cell>,
    color: Rgb,
}

impl TextCanvas {
    /// Cell sizes of zero are treated as one pixel.
    pub fn new(width: u32, height: u32, cell_w: u32, cell_h: u32) -> Self {
        let cell_w = cell_w.max(1);
        let cell_h = cell_h.max(1);
        let cols = (width / cell_w) as usize;
        let rows = (height / cell_h) as usize;
        Self {
            cols,
            rows,
            cell_w: cell_w.min(i32::MAX as u32) as i32,
            cell_h: cell_h.min(i32::MAX as u32) as i32,
            cells: vec![BLANK; cols * rows],
            color: Rgb::BLACK,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at `(col, row)`, or `None` outside the grid.
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.index(col, row).map(|i| self.cells[i].ch)
    }

    pub fn color_at(&self, col: usize, row: usize) -> Option<Rgb> {
        self.index(col, row).map(|i| self.cells[i].color)
    }

    /// Row `row` with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row * self.cols;
        let line: String = self.cells[start..start + self.cols].iter().map(|c| c.ch).collect();
        line.trim_end().to_string()
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row * self.cols + col)
    }

    fn cell_col(&self, x: i32) -> i64 {
        i64::from(x).div_euclid(i64::from(self.cell_w))
    }

    fn cell_row(&self, y: i32) -> i64 {
        i64::from(y).div_euclid(i64::from(self.cell_h))
    }

    /// Clamp a pixel span `[start, end)` to grid cells along one axis.
    fn span(start: i64, end: i64, limit: usize) -> core::ops::Range<usize> {
        let lo = start.clamp(0, limit as i64) as usize;
        let hi = end.clamp(0, limit as i64) as usize;
        lo..hi.max(lo)
    }
}

impl Surface for TextCanvas {
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        let x0 = i64::from(bounds.x());
        let y0 = i64::from(bounds.y());
        let cw = i64::from(self.cell_w);
        let ch = i64::from(self.cell_h);
        // Cells whose top left pixel is covered.
        let cols = Self::span(
            (x0 + cw - 1).div_euclid(cw),
            (x0 + i64::from(bounds.width) + cw - 1).div_euclid(cw),
            self.cols,
        );
        let rows = Self::span(
            (y0 + ch - 1).div_euclid(ch),
            (y0 + i64::from(bounds.height) + ch - 1).div_euclid(ch),
            self.rows,
        );
        for row in rows {
            for col in cols.clone() {
                self.cells[row * self.cols + col] = Cell { ch: ' ', color };
            }
        }
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn draw_text(&mut self, text: &str, at: Position, _font: &DisplayFont) {
        let row = self.cell_row(at.y.saturating_sub(1));
        if row < 0 || row >= self.rows as i64 {
            return;
        }
        let row = row as usize;
        let start = self.cell_col(at.x);
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            if col < 0 {
                continue;
            }
            if col >= self.cols as i64 {
                break;
            }
            let color = self.color;
            self.cells[row * self.cols + col as usize] = Cell { ch, color };
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row_text(row))?;
        }
        Ok(())
    }
}
