//! Rendering: the draw-surface abstraction, the custom cell renderers, and
//! the Canvas 2D backend.

mod canvas;
mod cell_renderer;
mod surface;

pub use canvas::CanvasSurface;
pub use cell_renderer::{renderer_for, Activation, ButtonRenderer, CellRenderer, TagsRenderer};
pub use surface::{DrawSurface, TextAlign};
