//! Checklist popup editor for multiselect cells.
//!
//! Lifecycle: `closed → open(on activate) → {toggle option}* → closed`.
//! Commit happens only on explicit close; dismissing the popup (dropping it
//! without commit) leaves the underlying row untouched. There is no
//! intermediate autosave.

use crate::edit::EditValue;

/// An open multiselect editor: the full option list plus the pending
/// selection. Toggles accumulate here and reach the row store only through
/// [`MultiselectEditor::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiselectEditor {
    options: Vec<String>,
    selected: Vec<String>,
}

impl MultiselectEditor {
    /// Open an editor seeded with the cell's payload.
    pub fn new(options: Vec<String>, selected: Vec<String>) -> Self {
        Self { options, selected }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The pending selection, in toggle order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    /// Toggle one option in the pending selection. Unknown options are
    /// ignored.
    pub fn toggle(&mut self, option: &str) {
        if !self.options.iter().any(|o| o == option) {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|s| s == option) {
            self.selected.remove(pos);
        } else {
            self.selected.push(option.to_string());
        }
    }

    /// Explicit close: package the pending selection as a replacement edit.
    pub fn commit(self) -> EditValue {
        EditValue::Selection(self.selected)
    }
}
