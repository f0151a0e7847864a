//! Pre-computed pixel layout and viewport state.
//!
//! Column positions are computed once per view refresh, enabling cheap
//! lookups for cell rectangles and hit testing. Rows are uniform height, so
//! row lookups are arithmetic.

use crate::types::Column;

/// Row height in logical pixels.
pub const ROW_HEIGHT: f32 = 35.0;
/// Header band height in logical pixels.
pub const HEADER_HEIGHT: f32 = 40.0;
/// Width of the row-marker gutter (selection checkboxes / indices).
pub const ROW_MARKER_WIDTH: f32 = 50.0;

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Pre-computed layout for the current filtered view.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Cumulative column positions: `col_positions[i]` is the x of column
    /// i's left edge in content coordinates; one extra final edge entry.
    col_positions: Vec<f32>,
    row_count: usize,
}

impl GridLayout {
    pub fn new(columns: &[Column], row_count: usize) -> Self {
        let mut col_positions = Vec::with_capacity(columns.len() + 1);
        let mut x = 0.0f32;
        for column in columns {
            col_positions.push(x);
            x += column.width.max(0.0);
        }
        col_positions.push(x); // final edge
        Self {
            col_positions,
            row_count,
        }
    }

    pub fn column_count(&self) -> usize {
        self.col_positions.len().saturating_sub(1)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Left edge of a column in content coordinates.
    pub fn col_x(&self, col: usize) -> Option<f32> {
        if col < self.column_count() {
            self.col_positions.get(col).copied()
        } else {
            None
        }
    }

    pub fn col_width(&self, col: usize) -> Option<f32> {
        let left = self.col_positions.get(col)?;
        let right = self.col_positions.get(col + 1)?;
        Some(right - left)
    }

    pub fn total_width(&self) -> f32 {
        self.col_positions.last().copied().unwrap_or(0.0)
    }

    pub fn total_height(&self) -> f32 {
        self.row_count as f32 * ROW_HEIGHT
    }

    /// Column containing content x, if any.
    pub fn col_at_x(&self, x: f32) -> Option<usize> {
        if x < 0.0 || x >= self.total_width() {
            return None;
        }
        // Binary search over the left edges.
        let idx = match self
            .col_positions
            .binary_search_by(|edge| edge.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        (idx < self.column_count()).then_some(idx)
    }

    /// Row containing content y, if any.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn row_at_y(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let row = (y / ROW_HEIGHT).floor() as usize;
        (row < self.row_count).then_some(row)
    }

    /// Content-coordinate rectangle of a cell.
    pub fn cell_rect(&self, col: usize, row: usize) -> Option<Rect> {
        if row >= self.row_count {
            return None;
        }
        let x = self.col_x(col)?;
        let w = self.col_width(col)?;
        Some(Rect::new(x, row as f32 * ROW_HEIGHT, w, ROW_HEIGHT))
    }
}

/// Viewport state — the visible area of the grid.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates.
    pub scroll_x: f32,
    /// Vertical scroll position in content coordinates.
    pub scroll_y: f32,
    /// Viewport width in logical pixels.
    pub width: f32,
    /// Viewport height in logical pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    /// Visible row range (inclusive) for the content band below the header.
    pub fn visible_rows(&self, layout: &GridLayout) -> (usize, usize) {
        if layout.row_count() == 0 {
            return (0, 0);
        }
        let last = layout.row_count() - 1;
        let content_height = (self.height - HEADER_HEIGHT).max(0.0);
        let start = layout.row_at_y(self.scroll_y).unwrap_or(last);
        let end = layout
            .row_at_y(self.scroll_y + content_height)
            .unwrap_or(last);
        (start.min(last), end.min(last))
    }

    /// Visible column range (inclusive) for the content band right of the
    /// row markers.
    pub fn visible_cols(&self, layout: &GridLayout) -> (usize, usize) {
        if layout.column_count() == 0 {
            return (0, 0);
        }
        let last = layout.column_count() - 1;
        let content_width = (self.width - ROW_MARKER_WIDTH).max(0.0);
        let start = layout.col_at_x(self.scroll_x).unwrap_or(last);
        let end = layout
            .col_at_x(self.scroll_x + content_width)
            .unwrap_or(last);
        (start.min(last), end.min(last))
    }

    /// Convert content coordinates to screen coordinates.
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x - self.scroll_x + ROW_MARKER_WIDTH,
            y - self.scroll_y + HEADER_HEIGHT,
        )
    }

    /// Convert screen coordinates to content coordinates. Returns `None`
    /// inside the header band or row-marker gutter.
    pub fn to_content(&self, screen_x: f32, screen_y: f32) -> Option<(f32, f32)> {
        if screen_x < ROW_MARKER_WIDTH || screen_y < HEADER_HEIGHT {
            return None;
        }
        Some((
            screen_x - ROW_MARKER_WIDTH + self.scroll_x,
            screen_y - HEADER_HEIGHT + self.scroll_y,
        ))
    }

    /// Clamp scroll so the content end stays reachable without overshoot.
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        let content_width = (self.width - ROW_MARKER_WIDTH).max(0.0);
        let content_height = (self.height - HEADER_HEIGHT).max(0.0);
        let max_x = (layout.total_width() - content_width).max(0.0);
        let max_y = (layout.total_height() - content_height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, layout: &GridLayout) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(layout);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
