use serde::{Deserialize, Serialize};

/// Default width for newly created columns, in logical pixels.
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;

/// Declared type of a column. Drives cell projection and edit interpretation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
    Url,
    Image,
    Select,
    Multiselect,
    /// Non-editable action cell (e.g. "View Details").
    Button,
}

impl std::str::FromStr for ColumnType {
    type Err = crate::error::GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "url" => Ok(Self::Url),
            "image" => Ok(Self::Image),
            "select" => Ok(Self::Select),
            "multiselect" => Ok(Self::Multiselect),
            "button" => Ok(Self::Button),
            other => Err(crate::error::GridError::Other(format!(
                "unknown column type: {other:?}"
            ))),
        }
    }
}

/// Static schema entry describing one field: stable id, display label,
/// declared type, and (for select/multiselect) the enumerated options.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique, stable key. Row fields are keyed by this.
    pub id: String,
    /// Display label shown in the header.
    pub title: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
    /// Width in logical pixels. Mutable via resize.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Enumerated options, only meaningful for select/multiselect.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<Vec<String>>,
}

fn default_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ty,
            width: DEFAULT_COLUMN_WIDTH,
            options: None,
        }
    }

    /// Builder-style width override.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Builder-style options for select/multiselect columns.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

/// Derive a machine id from a display name: lowercase, whitespace runs
/// collapsed to a single underscore.
pub fn derive_column_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            in_space = true;
        } else {
            if in_space && !id.is_empty() {
                id.push('_');
            }
            in_space = false;
            for lower in ch.to_lowercase() {
                id.push(lower);
            }
        }
    }
    id
}
