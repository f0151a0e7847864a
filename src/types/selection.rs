/// Transient selection state: selected rows/columns plus the current cell.
///
/// Row and column indices are view-relative (into the filtered view), and are
/// discarded whenever the view changes. Selection never reaches the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSelection {
    /// Selected view row indices, in selection order.
    pub rows: Vec<usize>,
    /// Selected column indices, in selection order.
    pub columns: Vec<usize>,
    /// Current cell as (col, row), if any.
    pub current: Option<(usize, usize)>,
}

impl GridSelection {
    pub fn clear(&mut self) {
        self.rows.clear();
        self.columns.clear();
        self.current = None;
    }

    pub fn select_cell(&mut self, col: usize, row: usize) {
        self.current = Some((col, row));
    }

    /// Multi-select toggle for a row marker click.
    pub fn toggle_row(&mut self, row: usize) {
        if let Some(pos) = self.rows.iter().position(|&r| r == row) {
            self.rows.remove(pos);
        } else {
            self.rows.push(row);
        }
    }

    pub fn is_row_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }
}

/// State of an in-flight row drag (drag-to-reorder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// View row index where the drag started.
    pub start_row: usize,
}
