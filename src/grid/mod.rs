//! The grid surface: state, hit testing, painting, and the WASM-exported
//! view wrapper.
//!
//! [`GridState`] is target-independent and drives everything through the
//! [`DrawSurface`] trait, so the full interaction loop is testable natively.
//! The `GridView` wrapper binds it to a canvas and the document's keyboard
//! on wasm32.

mod keyboard;
pub mod popup;

use crate::edit::{apply_cell_edit, EditValue};
use crate::error::{GridError, Result};
use crate::form::{EditForm, FormErrors};
use crate::layout::{GridLayout, Rect, Viewport, HEADER_HEIGHT, ROW_HEIGHT, ROW_MARKER_WIDTH};
use crate::model::{FilterView, TableModel};
use crate::project::project;
use crate::render::{renderer_for, Activation, CellRenderer, DrawSurface, TagsRenderer, TextAlign};
use crate::types::{Cell, ColumnType, DragState, GridSelection, GridTheme};
use self::popup::MultiselectEditor;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;
#[cfg(target_arch = "wasm32")]
use crate::types::{Column, Row};
#[cfg(target_arch = "wasm32")]
use self::keyboard::KeySubscription;

/// Narrowest a column can be dragged.
const MIN_COLUMN_WIDTH: f32 = 40.0;
/// Height of one option row in the checklist popup.
const POPUP_OPTION_HEIGHT: f32 = 28.0;
/// Minimum popup panel width.
const POPUP_MIN_WIDTH: f32 = 200.0;
/// Checkbox square side, boolean cells and popup options.
const CHECKBOX_SIZE: f32 = 14.0;

/// An open checklist popup, anchored to the cell that spawned it.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenEditor {
    pub editor: MultiselectEditor,
    /// Anchor column index.
    pub col: usize,
    /// Anchor view row index.
    pub row: usize,
}

/// All mutable state of one grid instance.
pub struct GridState {
    model: TableModel,
    theme: GridTheme,
    query: String,
    show_search: bool,
    view: FilterView,
    layout: GridLayout,
    viewport: Viewport,
    selection: GridSelection,
    popup: Option<OpenEditor>,
    inspected_row: Option<u64>,
    hover_col: Option<usize>,
    drag: Option<DragState>,
    needs_render: bool,
}

impl GridState {
    pub fn new(model: TableModel, theme: GridTheme) -> Self {
        let view = FilterView::derive(&model, "");
        let layout = GridLayout::new(model.columns(), view.len());
        Self {
            model,
            theme,
            query: String::new(),
            show_search: false,
            view,
            layout,
            viewport: Viewport::default(),
            selection: GridSelection::default(),
            popup: None,
            inspected_row: None,
            hover_col: None,
            drag: None,
            needs_render: true,
        }
    }

    /// Re-derive the filtered view and layout after any model or query
    /// change, and keep the scroll position in range.
    fn refresh(&mut self) {
        self.view = FilterView::derive(&self.model, &self.query);
        self.layout = GridLayout::new(self.model.columns(), self.view.len());
        self.viewport.clamp_scroll(&self.layout);
        self.needs_render = true;
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn view(&self) -> &FilterView {
        &self.view
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &GridSelection {
        &self.selection
    }

    pub fn theme(&self) -> &GridTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: GridTheme) {
        self.theme = theme;
        self.needs_render = true;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_search(&self) -> bool {
        self.show_search
    }

    /// Row currently shown in the side panel, if any.
    pub fn inspected_row(&self) -> Option<u64> {
        self.inspected_row
    }

    /// Close the side panel.
    pub fn close_panel(&mut self) {
        self.inspected_row = None;
        self.needs_render = true;
    }

    pub fn popup(&self) -> Option<&OpenEditor> {
        self.popup.as_ref()
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// The cell currently projected at a view coordinate.
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        project(&self.model, &self.view, col, row)
    }

    /// Apply an edited value at a view coordinate and re-derive the view.
    pub fn commit_edit(&mut self, col: usize, row: usize, value: EditValue) -> Result<()> {
        apply_cell_edit(&mut self.model, &self.view, col, row, value)?;
        self.refresh();
        Ok(())
    }

    /// Commit a typed edit from the host's text overlay. Gated on whether
    /// the target cell opens an overlay at all; booleans, buttons, and tags
    /// have their own click paths. Returns whether the edit was applied.
    pub fn commit_overlay_edit(
        &mut self,
        col: usize,
        row: usize,
        value: EditValue,
    ) -> Result<bool> {
        if !self.cell_at(col, row).allows_overlay() {
            return Ok(false);
        }
        self.commit_edit(col, row, value)?;
        Ok(true)
    }

    /// Clipboard text for the cell at a view coordinate.
    pub fn copy_cell(&self, col: usize, row: usize) -> String {
        self.cell_at(col, row).copy_data()
    }

    /// Update the search query. Selection indices are view-relative, so any
    /// query change discards them.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.selection.clear();
        self.refresh();
    }

    /// Show or hide the search interface; hiding clears the query.
    pub fn toggle_search(&mut self) {
        self.show_search = !self.show_search;
        if !self.show_search && !self.query.is_empty() {
            self.set_query("");
        }
        self.needs_render = true;
    }

    /// Keyboard entry point. Returns `true` when the keystroke was consumed
    /// and the browser default should be suppressed.
    pub fn key_down(&mut self, key: &str, ctrl_or_meta: bool) -> bool {
        if keyboard::is_search_toggle(key, ctrl_or_meta) {
            self.toggle_search();
            return true;
        }
        if key == "Escape" {
            if self.popup.is_some() {
                // Dismissal: pending toggles are discarded.
                self.popup = None;
                self.needs_render = true;
                return true;
            }
            if self.show_search {
                self.toggle_search();
                return true;
            }
        }
        false
    }

    /// Append an empty row. Returns its stable id.
    pub fn add_row(&mut self) -> u64 {
        let id = self.model.add_row();
        self.refresh();
        id
    }

    /// Append a column named by the user. Returns the derived column id.
    pub fn add_column(&mut self, name: &str, ty: ColumnType) -> Result<String> {
        let id = self.model.add_column(name, ty)?;
        self.refresh();
        Ok(id)
    }

    /// Column resize, clamped to a usable minimum.
    pub fn resize_column(&mut self, col: usize, width: f32) {
        self.model.set_column_width(col, width.max(MIN_COLUMN_WIDTH));
        self.refresh();
    }

    /// Reorder by view positions: both endpoints resolve through the view to
    /// stable ids, then to store positions, so reordering under an active
    /// filter moves the right rows.
    pub fn move_row(&mut self, from: usize, to: usize) {
        let (Some(from_id), Some(to_id)) = (self.view.row_id_at(from), self.view.row_id_at(to))
        else {
            return;
        };
        let (Some(from_pos), Some(to_pos)) =
            (self.model.position_of(from_id), self.model.position_of(to_id))
        else {
            return;
        };
        self.model.move_row(from_pos, to_pos);
        self.refresh();
    }

    pub fn begin_drag(&mut self, row: usize) {
        if row < self.view.len() {
            self.drag = Some(DragState { start_row: row });
        }
    }

    pub fn end_drag(&mut self, row: usize) {
        if let Some(drag) = self.drag.take() {
            self.move_row(drag.start_row, row);
        }
    }

    /// Pointer movement in screen coordinates. Tracks the hovered header
    /// column for the hover highlight.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let hover = if y < HEADER_HEIGHT && x >= ROW_MARKER_WIDTH {
            self.layout
                .col_at_x(x - ROW_MARKER_WIDTH + self.viewport.scroll_x)
        } else {
            None
        };
        if hover != self.hover_col {
            self.hover_col = hover;
            self.needs_render = true;
        }
    }

    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        self.viewport.scroll_by(delta_x, delta_y, &self.layout);
        self.needs_render = true;
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.viewport.clamp_scroll(&self.layout);
        self.needs_render = true;
    }

    /// Toggle one option in the open popup's pending selection.
    pub fn toggle_popup_option(&mut self, option: &str) {
        if let Some(open) = self.popup.as_mut() {
            open.editor.toggle(option);
            self.needs_render = true;
        }
    }

    /// Close the popup. `commit` writes the pending selection back through
    /// the edit path; otherwise the toggles are discarded.
    pub fn close_popup(&mut self, commit: bool) -> Result<()> {
        let Some(open) = self.popup.take() else {
            return Ok(());
        };
        self.needs_render = true;
        if commit {
            let value = open.editor.commit();
            return self.commit_edit(open.col, open.row, value);
        }
        Ok(())
    }

    /// Pointer click in screen coordinates.
    ///
    /// An open popup captures the click first: inside it toggles the hit
    /// option, outside it closes the popup and commits. Otherwise the hit
    /// target decides: header selects the column, the marker gutter toggles
    /// row selection, boolean cells toggle in place, custom cells activate,
    /// and everything else just moves the current-cell selection.
    pub fn click(&mut self, x: f32, y: f32) -> Result<()> {
        if self.popup.is_some() {
            if let Some(option) = self.popup_option_at(x, y) {
                self.toggle_popup_option(&option);
                return Ok(());
            }
            return self.close_popup(true);
        }

        if y < HEADER_HEIGHT {
            if x >= ROW_MARKER_WIDTH {
                let content_x = x - ROW_MARKER_WIDTH + self.viewport.scroll_x;
                if let Some(col) = self.layout.col_at_x(content_x) {
                    self.selection.clear();
                    self.selection.columns.push(col);
                    self.needs_render = true;
                }
            }
            return Ok(());
        }

        if x < ROW_MARKER_WIDTH {
            let content_y = y - HEADER_HEIGHT + self.viewport.scroll_y;
            if let Some(row) = self.layout.row_at_y(content_y) {
                self.selection.toggle_row(row);
                self.needs_render = true;
            }
            return Ok(());
        }

        let Some((cx, cy)) = self.viewport.to_content(x, y) else {
            return Ok(());
        };
        let (Some(col), Some(row)) = (self.layout.col_at_x(cx), self.layout.row_at_y(cy)) else {
            return Ok(());
        };

        let cell = self.cell_at(col, row);
        match renderer_for(&cell).and_then(|r| r.on_activate(&cell)) {
            Some(Activation::InspectRow(row_id)) => {
                self.inspected_row = Some(row_id);
                self.needs_render = true;
            }
            Some(Activation::OpenEditor(editor)) => {
                self.popup = Some(OpenEditor { editor, col, row });
                self.needs_render = true;
            }
            None => {
                if let Cell::Boolean { value } = cell {
                    self.commit_edit(col, row, EditValue::Boolean(!value))?;
                }
                self.selection.select_cell(col, row);
                self.needs_render = true;
            }
        }
        Ok(())
    }

    /// Validate and apply a side-panel form submission against a row.
    ///
    /// A non-empty error set is returned without touching the store; an
    /// unknown row id is an error.
    pub fn submit_form(&mut self, row_id: u64, form: &EditForm) -> Result<FormErrors> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Ok(errors);
        }
        let row = self
            .model
            .row_by_id_mut(row_id)
            .ok_or(GridError::UnknownRow(row_id))?;
        form.apply_to(row);
        self.refresh();
        Ok(errors)
    }

    /// Screen rectangle of the open popup panel, anchored below its cell.
    pub fn popup_rect(&self) -> Option<Rect> {
        let open = self.popup.as_ref()?;
        let anchor = self.layout.cell_rect(open.col, open.row)?;
        let (sx, sy) = self.viewport.to_screen(anchor.x, anchor.y);
        let w = anchor.w.max(POPUP_MIN_WIDTH);
        let h = open.editor.options().len() as f32 * POPUP_OPTION_HEIGHT;
        Some(Rect::new(sx, sy + anchor.h, w, h))
    }

    /// Popup option under a screen coordinate, if the popup is open and hit.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn popup_option_at(&self, x: f32, y: f32) -> Option<String> {
        let rect = self.popup_rect()?;
        if !rect.contains(x, y) {
            return None;
        }
        let idx = ((y - rect.y) / POPUP_OPTION_HEIGHT).floor() as usize;
        self.popup
            .as_ref()?
            .editor
            .options()
            .get(idx)
            .cloned()
    }

    /// Paint the full grid into `surface`.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        let width = self.viewport.width;
        let height = self.viewport.height;
        surface.fill_rect(Rect::new(0.0, 0.0, width, height), &self.theme.bg_cell);

        if self.layout.row_count() > 0 && self.layout.column_count() > 0 {
            let (row_start, row_end) = self.viewport.visible_rows(&self.layout);
            let (col_start, col_end) = self.viewport.visible_cols(&self.layout);

            for row in row_start..=row_end {
                for col in col_start..=col_end {
                    let Some(rect) = self.layout.cell_rect(col, row) else {
                        continue;
                    };
                    let (sx, sy) = self.viewport.to_screen(rect.x, rect.y);
                    let screen = Rect::new(sx, sy, rect.w, rect.h);
                    let cell = self.cell_at(col, row);
                    if let Some(renderer) = renderer_for(&cell) {
                        renderer.paint(surface, screen, &cell, &self.theme);
                    } else {
                        self.paint_builtin(surface, screen, &cell);
                    }
                    surface.stroke_rect(screen, &self.theme.border_color, 1.0);
                }
            }

            self.paint_row_markers(surface, row_start, row_end);
        }

        self.paint_header(surface, width);
        self.paint_popup(surface);
        self.needs_render = false;
    }

    fn paint_builtin(&self, surface: &mut dyn DrawSurface, rect: Rect, cell: &Cell) {
        let theme = &self.theme;
        let font = theme.base_font();
        let pad = theme.cell_horizontal_padding;
        let mid_y = rect.y + rect.h / 2.0;
        match cell {
            Cell::Text { display } => {
                surface.push_clip(rect);
                surface.fill_text(display, rect.x + pad, mid_y, &theme.text_dark, &font, TextAlign::Left);
                surface.pop_clip();
            }
            Cell::Number { display, .. } => {
                surface.push_clip(rect);
                surface.fill_text(
                    display,
                    rect.x + rect.w - pad,
                    mid_y,
                    &theme.text_dark,
                    &font,
                    TextAlign::Right,
                );
                surface.pop_clip();
            }
            Cell::Boolean { value } => {
                let box_rect = Rect::new(
                    rect.x + (rect.w - CHECKBOX_SIZE) / 2.0,
                    rect.y + (rect.h - CHECKBOX_SIZE) / 2.0,
                    CHECKBOX_SIZE,
                    CHECKBOX_SIZE,
                );
                if *value {
                    surface.fill_rounded_rect(box_rect, 3.0, &theme.accent_color);
                } else {
                    surface.stroke_rect(box_rect, &theme.text_medium, 1.0);
                }
            }
            Cell::Uri { target } => {
                surface.push_clip(rect);
                surface.fill_text(target, rect.x + pad, mid_y, &theme.link_color, &font, TextAlign::Left);
                surface.pop_clip();
            }
            // Bubbles share the chip painting with the tags renderer.
            Cell::Bubble { values } => {
                let proxy = Cell::Tags {
                    options: Vec::new(),
                    selected: values.clone(),
                };
                TagsRenderer.paint(surface, rect, &proxy, theme);
            }
            Cell::Loading | Cell::Button { .. } | Cell::Tags { .. } => {}
        }
    }

    fn paint_row_markers(&self, surface: &mut dyn DrawSurface, row_start: usize, row_end: usize) {
        let theme = &self.theme;
        let font = theme.base_font();
        for row in row_start..=row_end {
            let (_, sy) = self.viewport.to_screen(0.0, row as f32 * ROW_HEIGHT);
            let marker = Rect::new(0.0, sy, ROW_MARKER_WIDTH, ROW_HEIGHT);
            let bg = if self.selection.is_row_selected(row) {
                &theme.accent_light
            } else {
                &theme.bg_header
            };
            surface.fill_rect(marker, bg);
            surface.stroke_rect(marker, &theme.border_color, 1.0);
            surface.fill_text(
                &(row + 1).to_string(),
                ROW_MARKER_WIDTH / 2.0,
                sy + ROW_HEIGHT / 2.0,
                &theme.text_medium,
                &font,
                TextAlign::Center,
            );
        }
    }

    fn paint_header(&self, surface: &mut dyn DrawSurface, width: f32) {
        let theme = &self.theme;
        let band = Rect::new(0.0, 0.0, width, HEADER_HEIGHT);
        surface.fill_rect(band, &theme.bg_header);
        let font = theme.header_font();
        let mid_y = HEADER_HEIGHT / 2.0;

        if self.layout.column_count() > 0 {
            let (col_start, col_end) = self.viewport.visible_cols(&self.layout);
            for col in col_start..=col_end {
                let (Some(x), Some(w)) = (self.layout.col_x(col), self.layout.col_width(col))
                else {
                    continue;
                };
                let sx = x - self.viewport.scroll_x + ROW_MARKER_WIDTH;
                let cell = Rect::new(sx, 0.0, w, HEADER_HEIGHT);
                if self.selection.columns.contains(&col) {
                    surface.fill_rect(cell, &theme.bg_header_has_focus);
                } else if self.hover_col == Some(col) {
                    surface.fill_rect(cell, &theme.bg_header_hovered);
                }
                let title = self
                    .model
                    .column(col)
                    .map(|c| c.title.clone())
                    .unwrap_or_default();
                surface.push_clip(cell);
                surface.fill_text(
                    &title,
                    sx + theme.cell_horizontal_padding,
                    mid_y,
                    &theme.text_dark,
                    &font,
                    TextAlign::Left,
                );
                surface.pop_clip();
                surface.stroke_rect(cell, &theme.border_color, 1.0);
            }
        }

        // Corner above the marker gutter.
        let corner = Rect::new(0.0, 0.0, ROW_MARKER_WIDTH, HEADER_HEIGHT);
        surface.fill_rect(corner, &theme.bg_header);
        surface.stroke_rect(corner, &theme.border_color, 1.0);
    }

    fn paint_popup(&self, surface: &mut dyn DrawSurface) {
        let Some(rect) = self.popup_rect() else {
            return;
        };
        let Some(open) = self.popup.as_ref() else {
            return;
        };
        let theme = &self.theme;
        let font = theme.base_font();
        surface.fill_rect(rect, &theme.bg_cell);
        surface.stroke_rect(rect, &theme.border_color, 1.0);

        for (idx, option) in open.editor.options().iter().enumerate() {
            let y = rect.y + idx as f32 * POPUP_OPTION_HEIGHT;
            let row_rect = Rect::new(rect.x, y, rect.w, POPUP_OPTION_HEIGHT);
            let selected = open.editor.is_selected(option);
            if selected {
                surface.fill_rect(row_rect, &theme.accent_light);
            }
            let box_rect = Rect::new(
                rect.x + theme.cell_horizontal_padding,
                y + (POPUP_OPTION_HEIGHT - CHECKBOX_SIZE) / 2.0,
                CHECKBOX_SIZE,
                CHECKBOX_SIZE,
            );
            if selected {
                surface.fill_rounded_rect(box_rect, 3.0, &theme.accent_color);
            } else {
                surface.stroke_rect(box_rect, &theme.text_medium, 1.0);
            }
            surface.fill_text(
                option,
                box_rect.x + CHECKBOX_SIZE + theme.cell_horizontal_padding / 2.0,
                y + POPUP_OPTION_HEIGHT / 2.0,
                &theme.text_dark,
                &font,
                TextAlign::Left,
            );
        }
    }
}

// ============================================================================
// WASM32 wrapper
// ============================================================================

/// The grid view exported to JavaScript: binds [`GridState`] to a canvas
/// element and the document's keyboard.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<GridState>>,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
    // Held for its Drop: unregisters the document keydown listener.
    #[allow(dead_code)]
    key_subscription: Option<KeySubscription>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a grid over `canvas` from JS column and row arrays.
    ///
    /// Columns: `[{ id, title, type, width?, options? }]`.
    /// Rows: flat objects with a numeric `id` plus field values.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        columns: JsValue,
        rows: JsValue,
        dpr: f32,
    ) -> std::result::Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let columns: Vec<Column> = serde_wasm_bindgen::from_value(columns)
            .map_err(|e| JsValue::from_str(&format!("invalid columns: {e}")))?;
        let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("invalid rows: {e}")))?;

        let surface = CanvasSurface::new(&canvas)?;
        surface.apply_dpr(f64::from(dpr));

        let mut state = GridState::new(TableModel::new(columns, rows), GridTheme::default());
        state.resize_viewport(canvas.width() as f32 / dpr, canvas.height() as f32 / dpr);
        let state = Rc::new(RefCell::new(state));

        let key_subscription = {
            let state = Rc::clone(&state);
            KeySubscription::new(Box::new(move |event: KeyboardEvent| {
                let key = event.key();
                let ctrl = event.ctrl_key() || event.meta_key();
                if state.borrow_mut().key_down(&key, ctrl) {
                    event.prevent_default();
                }
            }))
        };

        Ok(GridView {
            state,
            surface,
            canvas,
            key_subscription,
        })
    }

    /// Paint the current state if anything changed since the last frame.
    pub fn render(&mut self) {
        let mut state = self.state.borrow_mut();
        if !state.needs_render() {
            return;
        }
        let (width, height) = {
            let vp = state.viewport();
            (vp.width, vp.height)
        };
        self.surface.clear(width, height);
        state.draw(&mut self.surface);
    }

    /// Force a repaint on the next [`render`](GridView::render).
    pub fn invalidate(&mut self) {
        self.state.borrow_mut().needs_render = true;
    }

    pub fn click(&mut self, x: f32, y: f32) -> std::result::Result<(), JsValue> {
        self.state.borrow_mut().click(x, y).map_err(Into::into)
    }

    pub fn scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.state.borrow_mut().scroll_by(delta_x, delta_y);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.state.borrow_mut().pointer_move(x, y);
    }

    /// Commit an overlay edit of a plain cell. The JS value must fit the
    /// cell: a string for text/date/image/url cells, a number for number
    /// cells, a string array for option bubbles. Returns whether the edit
    /// was applied.
    #[wasm_bindgen(js_name = commitEdit)]
    pub fn commit_edit(
        &mut self,
        col: usize,
        row: usize,
        value: JsValue,
    ) -> std::result::Result<bool, JsValue> {
        let mut state = self.state.borrow_mut();
        let edit = match state.cell_at(col, row) {
            Cell::Text { .. } => EditValue::Text(
                value
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("expected a string"))?,
            ),
            Cell::Uri { .. } => EditValue::Uri(
                value
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("expected a string"))?,
            ),
            Cell::Number { .. } => EditValue::Number(
                value
                    .as_f64()
                    .ok_or_else(|| JsValue::from_str("expected a number"))?,
            ),
            Cell::Bubble { .. } => EditValue::Selection(
                serde_wasm_bindgen::from_value(value)
                    .map_err(|e| JsValue::from_str(&format!("expected a string array: {e}")))?,
            ),
            _ => return Ok(false),
        };
        state.commit_overlay_edit(col, row, edit).map_err(Into::into)
    }

    /// Clipboard text for a cell.
    #[wasm_bindgen(js_name = copyCell)]
    pub fn copy_cell(&self, col: usize, row: usize) -> String {
        self.state.borrow().copy_cell(col, row)
    }

    /// Resize the backing canvas and viewport.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.surface.apply_dpr(f64::from(dpr));
        self.state
            .borrow_mut()
            .resize_viewport(width as f32 / dpr, height as f32 / dpr);
    }

    #[wasm_bindgen(js_name = setSearchQuery)]
    pub fn set_search_query(&mut self, query: &str) {
        self.state.borrow_mut().set_query(query);
    }

    #[wasm_bindgen(js_name = toggleSearch)]
    pub fn toggle_search(&mut self) {
        self.state.borrow_mut().toggle_search();
    }

    #[wasm_bindgen(js_name = showSearch)]
    pub fn show_search(&self) -> bool {
        self.state.borrow().show_search()
    }

    /// Append an empty row; returns its id.
    #[allow(clippy::cast_precision_loss)]
    #[wasm_bindgen(js_name = addRow)]
    pub fn add_row(&mut self) -> f64 {
        self.state.borrow_mut().add_row() as f64
    }

    /// Append a column; `ty` is the lowercase type name. Returns the derived
    /// column id.
    #[wasm_bindgen(js_name = addColumn)]
    pub fn add_column(&mut self, name: &str, ty: &str) -> std::result::Result<String, JsValue> {
        let ty: ColumnType = ty.parse()?;
        self.state
            .borrow_mut()
            .add_column(name, ty)
            .map_err(Into::into)
    }

    #[wasm_bindgen(js_name = resizeColumn)]
    pub fn resize_column(&mut self, col: usize, width: f32) {
        self.state.borrow_mut().resize_column(col, width);
    }

    #[wasm_bindgen(js_name = beginRowDrag)]
    pub fn begin_row_drag(&mut self, row: usize) {
        self.state.borrow_mut().begin_drag(row);
    }

    #[wasm_bindgen(js_name = endRowDrag)]
    pub fn end_row_drag(&mut self, row: usize) {
        self.state.borrow_mut().end_drag(row);
    }

    #[wasm_bindgen(js_name = togglePopupOption)]
    pub fn toggle_popup_option(&mut self, option: &str) {
        self.state.borrow_mut().toggle_popup_option(option);
    }

    #[wasm_bindgen(js_name = closePopup)]
    pub fn close_popup(&mut self, commit: bool) -> std::result::Result<(), JsValue> {
        self.state.borrow_mut().close_popup(commit).map_err(Into::into)
    }

    /// Id of the row shown in the side panel, or `undefined`.
    #[allow(clippy::cast_precision_loss)]
    #[wasm_bindgen(js_name = inspectedRow)]
    pub fn inspected_row(&self) -> Option<f64> {
        self.state.borrow().inspected_row().map(|id| id as f64)
    }

    #[wasm_bindgen(js_name = closePanel)]
    pub fn close_panel(&mut self) {
        self.state.borrow_mut().close_panel();
    }

    /// Current rows as flat JS objects (after any edits).
    pub fn rows(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.state.borrow().model().rows())
            .map_err(|e| JsValue::from_str(&format!("serialization error: {e}")))
    }

    /// Side-panel form seeded from a row's current values.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[wasm_bindgen(js_name = editFormFor)]
    pub fn edit_form_for(&self, row_id: f64) -> std::result::Result<JsValue, JsValue> {
        let state = self.state.borrow();
        let row = state
            .model()
            .row_by_id(row_id as u64)
            .ok_or_else(|| JsValue::from_str("unknown row"))?;
        serde_wasm_bindgen::to_value(&EditForm::from_row(row))
            .map_err(|e| JsValue::from_str(&format!("serialization error: {e}")))
    }

    /// Validate and apply a side-panel form submission. Returns the error
    /// object; an empty object means the row was updated.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[wasm_bindgen(js_name = submitEditForm)]
    pub fn submit_edit_form(
        &mut self,
        row_id: f64,
        form: JsValue,
    ) -> std::result::Result<JsValue, JsValue> {
        let form: EditForm = serde_wasm_bindgen::from_value(form)
            .map_err(|e| JsValue::from_str(&format!("invalid form: {e}")))?;
        let errors = self
            .state
            .borrow_mut()
            .submit_form(row_id as u64, &form)?;
        serde_wasm_bindgen::to_value(&errors)
            .map_err(|e| JsValue::from_str(&format!("serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: JsValue) -> std::result::Result<(), JsValue> {
        let theme: GridTheme = serde_wasm_bindgen::from_value(theme)
            .map_err(|e| JsValue::from_str(&format!("invalid theme: {e}")))?;
        self.state.borrow_mut().set_theme(theme);
        Ok(())
    }
}
