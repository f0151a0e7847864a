//! Search filter: a derived, ordered view over the row store.

use crate::model::TableModel;
use crate::types::Row;

/// Ordered subsequence of row ids matching a search query.
///
/// Purely presentational: never mutates the row store, and must be re-derived
/// whenever the rows or the query change. An empty query is the identity view
/// (all rows, original order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    row_ids: Vec<u64>,
}

impl FilterView {
    /// Derive the view for `query` over the model's current rows.
    ///
    /// A row matches when at least one field's string form (or its id)
    /// contains the query, case-insensitively.
    pub fn derive(model: &TableModel, query: &str) -> Self {
        if query.is_empty() {
            return Self {
                row_ids: model.rows().iter().map(|r| r.id).collect(),
            };
        }
        let needle = query.to_lowercase();
        Self {
            row_ids: model
                .rows()
                .iter()
                .filter(|row| row_matches(row, &needle))
                .map(|r| r.id)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    /// Stable row id at a view position.
    pub fn row_id_at(&self, view_row: usize) -> Option<u64> {
        self.row_ids.get(view_row).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.row_ids.iter().copied()
    }
}

fn row_matches(row: &Row, needle: &str) -> bool {
    if row.id.to_string().contains(needle) {
        return true;
    }
    row.fields
        .values()
        .any(|v| v.to_display_string().to_lowercase().contains(needle))
}
