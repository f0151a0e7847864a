//! Custom cell renderers: the closed set of paint/interact strategies for
//! cell kinds the base grid does not draw natively.
//!
//! Each renderer exposes a predicate, a paint routine into a given
//! rectangle, an activation handler, and (where editable) a popup-editor
//! factory. Dispatch is a fixed lookup over the two variants — no runtime
//! type tests inside drawing code.

use crate::grid::popup::MultiselectEditor;
use crate::layout::Rect;
use crate::render::surface::{DrawSurface, TextAlign};
use crate::types::{Cell, GridTheme};

/// Corner radius of tag chips.
const CHIP_RADIUS: f32 = 10.0;
/// Horizontal padding inside a chip.
const CHIP_PAD_X: f32 = 6.0;
/// Gap between adjacent chips.
const CHIP_GAP: f32 = 4.0;
/// Ellipsis marker drawn when chips no longer fit.
const ELLIPSIS: &str = "…";
/// Horizontal inset of the button pill inside its cell.
const BUTTON_INSET_X: f32 = 8.0;
/// Vertical inset of the button pill inside its cell.
const BUTTON_INSET_Y: f32 = 6.0;
/// Corner radius of the button pill.
const BUTTON_RADIUS: f32 = 4.0;

/// What an activation produced, for the grid surface to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Open the side panel for this row.
    InspectRow(u64),
    /// Open the checklist popup editor.
    OpenEditor(MultiselectEditor),
}

/// Fixed capability interface implemented by every custom renderer.
pub trait CellRenderer {
    /// Does this cell payload belong to me?
    fn matches(&self, cell: &Cell) -> bool;

    /// Draw into `rect` using the active theme.
    fn paint(&self, surface: &mut dyn DrawSurface, rect: Rect, cell: &Cell, theme: &GridTheme);

    /// What happens on click/enter.
    fn on_activate(&self, cell: &Cell) -> Option<Activation>;
}

/// Action-button cell: centered label; activation inspects the bound row;
/// not directly editable.
pub struct ButtonRenderer;

impl CellRenderer for ButtonRenderer {
    fn matches(&self, cell: &Cell) -> bool {
        matches!(cell, Cell::Button { .. })
    }

    fn paint(&self, surface: &mut dyn DrawSurface, rect: Rect, cell: &Cell, theme: &GridTheme) {
        let Cell::Button { label, .. } = cell else {
            return;
        };
        surface.fill_rect(rect, &theme.bg_cell);
        let pill = Rect::new(
            rect.x + BUTTON_INSET_X,
            rect.y + BUTTON_INSET_Y,
            (rect.w - 2.0 * BUTTON_INSET_X).max(0.0),
            (rect.h - 2.0 * BUTTON_INSET_Y).max(0.0),
        );
        surface.fill_rounded_rect(pill, BUTTON_RADIUS, &theme.accent_color);
        surface.fill_text(
            label,
            rect.x + rect.w / 2.0,
            rect.y + rect.h / 2.0,
            &theme.text_light,
            &theme.base_font(),
            TextAlign::Center,
        );
    }

    fn on_activate(&self, cell: &Cell) -> Option<Activation> {
        let Cell::Button { row_id, .. } = cell else {
            return None;
        };
        Some(Activation::InspectRow(*row_id))
    }
}

/// Multiselect/tag-bubble cell: rounded chips left-to-right, truncated with
/// an ellipsis once remaining width is insufficient; activation opens the
/// checklist popup.
pub struct TagsRenderer;

impl CellRenderer for TagsRenderer {
    fn matches(&self, cell: &Cell) -> bool {
        matches!(cell, Cell::Tags { .. })
    }

    fn paint(&self, surface: &mut dyn DrawSurface, rect: Rect, cell: &Cell, theme: &GridTheme) {
        let Cell::Tags { selected, .. } = cell else {
            return;
        };
        surface.fill_rect(rect, &theme.bg_cell);
        surface.push_clip(rect);

        let font = theme.base_font();
        let chip_h = (rect.h - 2.0 * theme.cell_vertical_padding).max(0.0);
        let chip_y = rect.y + (rect.h - chip_h) / 2.0;
        let right_edge = rect.x + rect.w - theme.cell_horizontal_padding;
        let ellipsis_w = surface.text_width(ELLIPSIS, &font);
        let mut x = rect.x + theme.cell_horizontal_padding;

        for (idx, tag) in selected.iter().enumerate() {
            let chip_w = surface.text_width(tag, &font) + 2.0 * CHIP_PAD_X;
            // Keep room for the ellipsis marker unless this is the last chip.
            let reserve = if idx + 1 < selected.len() {
                ellipsis_w + CHIP_GAP
            } else {
                0.0
            };
            if x + chip_w + reserve > right_edge {
                surface.fill_text(
                    ELLIPSIS,
                    x,
                    rect.y + rect.h / 2.0,
                    &theme.text_medium,
                    &font,
                    TextAlign::Left,
                );
                break;
            }
            surface.fill_rounded_rect(
                Rect::new(x, chip_y, chip_w, chip_h),
                CHIP_RADIUS.min(chip_h / 2.0),
                &theme.bg_cell_medium,
            );
            surface.fill_text(
                tag,
                x + CHIP_PAD_X,
                rect.y + rect.h / 2.0,
                &theme.text_dark,
                &font,
                TextAlign::Left,
            );
            x += chip_w + CHIP_GAP;
        }

        surface.pop_clip();
    }

    fn on_activate(&self, cell: &Cell) -> Option<Activation> {
        let Cell::Tags { options, selected } = cell else {
            return None;
        };
        Some(Activation::OpenEditor(MultiselectEditor::new(
            options.clone(),
            selected.clone(),
        )))
    }
}

static BUTTON: ButtonRenderer = ButtonRenderer;
static TAGS: TagsRenderer = TagsRenderer;

/// Dispatch over the closed renderer set.
pub fn renderer_for(cell: &Cell) -> Option<&'static dyn CellRenderer> {
    if BUTTON.matches(cell) {
        Some(&BUTTON)
    } else if TAGS.matches(cell) {
        Some(&TAGS)
    } else {
        None
    }
}
