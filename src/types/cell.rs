/// The transient, render-ready projection of one (row, column) pair.
///
/// Cells are recomputed on every paint request and never stored. The
/// projector guarantees a cell for any coordinate: out-of-range queries
/// produce [`Cell::Loading`], missing fields the column type's empty
/// default.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Placeholder for coordinates outside the current bounds.
    Loading,
    /// Plain text (also dates, images, and unrecognized column types).
    Text { display: String },
    Number { value: f64, display: String },
    /// Toggled by direct click; no typed overlay.
    Boolean { value: bool },
    /// Hyperlink.
    Uri { target: String },
    /// Built-in tag display for select/multiselect without declared options.
    Bubble { values: Vec<String> },
    /// Custom action cell. Activation inspects the bound row.
    Button { label: String, row_id: u64 },
    /// Custom multiselect payload for the tags renderer and popup editor.
    Tags {
        options: Vec<String>,
        selected: Vec<String>,
    },
}

impl Cell {
    /// Whether the grid surface may open a typed edit overlay for this cell.
    pub fn allows_overlay(&self) -> bool {
        matches!(
            self,
            Cell::Text { .. } | Cell::Number { .. } | Cell::Uri { .. } | Cell::Bubble { .. }
        )
    }

    /// Text placed on the clipboard when this cell is copied.
    pub fn copy_data(&self) -> String {
        match self {
            Cell::Loading => String::new(),
            Cell::Text { display } => display.clone(),
            Cell::Number { display, .. } => display.clone(),
            Cell::Boolean { value } => value.to_string(),
            Cell::Uri { target } => target.clone(),
            Cell::Bubble { values } => values.join(","),
            Cell::Button { label, .. } => label.clone(),
            Cell::Tags { selected, .. } => selected.join(","),
        }
    }
}
