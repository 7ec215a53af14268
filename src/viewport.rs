//! Mapping between world coordinates and terminal cells.
//!
//! Row 0 holds the HUD and the last row the controls hint; the world is
//! stretched over the rows in between.

use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f64,
    pub world_height: f64,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64) -> Self {
        Viewport {
            cols: cols.max(1),
            rows: rows.max(3),
            world_width,
            world_height,
        }
    }

    /// First row of the play area.
    pub fn play_top(&self) -> u16 {
        1
    }

    /// Number of rows given to the play area.
    pub fn play_rows(&self) -> u16 {
        self.rows - 2
    }

    fn col_scale(&self) -> f64 {
        self.cols as f64 / self.world_width
    }

    fn row_scale(&self) -> f64 {
        self.play_rows() as f64 / self.world_height
    }

    /// The cell a world point falls in, clamped to the play area.
    pub fn to_cell(&self, x: f64, y: f64) -> (u16, u16) {
        let col = (x * self.col_scale()).floor();
        let row = (y * self.row_scale()).floor();
        let col = col.clamp(0.0, (self.cols - 1) as f64) as u16;
        let row = row.clamp(0.0, (self.play_rows() - 1) as f64) as u16;
        (col, self.play_top() + row)
    }

    /// Cells covered by a world rectangle: top-left cell plus a width and
    /// height of at least one cell each.
    pub fn cells_for(&self, rect: &Rect) -> (u16, u16, u16, u16) {
        let (col, row) = self.to_cell(rect.left(), rect.top());
        let width = ((rect.width * self.col_scale()).round() as u16).max(1);
        let height = ((rect.height * self.row_scale()).round() as u16).max(1);
        let width = width.min(self.cols - col);
        let height = height.min(self.play_top() + self.play_rows() - row);
        (col, row, width, height)
    }

    /// The world point at the centre of a cell (used for mouse clicks).
    pub fn to_world(&self, col: u16, row: u16) -> (f64, f64) {
        let x = (col as f64 + 0.5) / self.col_scale();
        let play_row = row.saturating_sub(self.play_top()) as f64;
        let y = (play_row + 0.5) / self.row_scale();
        (x.min(self.world_width), y.min(self.world_height))
    }
}
