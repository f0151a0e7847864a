//! Draw surface trait for pluggable paint backends.
//!
//! Abstracts the primitive paint operations the grid and the custom cell
//! renderers need, so the same paint code drives the Canvas 2D backend in
//! the browser and a recording surface in native tests.

use crate::layout::Rect;

/// Horizontal text alignment for [`DrawSurface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Primitive paint operations.
///
/// Coordinates are logical pixels. Text is drawn with a middle vertical
/// baseline at `y`.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f32);

    /// Filled rectangle with rounded corners (tag chips, buttons).
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: &str);

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        color: &str,
        font: &str,
        align: TextAlign,
    );

    /// Measured advance width of `text` in `font`.
    fn text_width(&mut self, text: &str, font: &str) -> f32;

    /// Clip subsequent drawing to `rect` until the matching [`pop_clip`].
    ///
    /// [`pop_clip`]: DrawSurface::pop_clip
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}
