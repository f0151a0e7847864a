//! Side-panel edit form: a validated, staged copy of one row.
//!
//! The form never writes through while the user types. Field values are
//! staged here, validated as a whole on submit, and applied to the row store
//! only when every rule passes.

use serde::{Deserialize, Serialize};

use crate::types::{Row, Value};

/// Staged field values for the side-panel form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub name: String,
    pub url: String,
    pub category: String,
    pub description: String,
    pub tag: String,
}

/// Per-field validation messages. An empty set means the form may be
/// submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.category.is_none() && self.tag.is_none()
    }
}

impl EditForm {
    /// Seed the form from a row's current field values.
    pub fn from_row(row: &Row) -> Self {
        let text = |key: &str| {
            row.get(key)
                .map(Value::to_display_string)
                .unwrap_or_default()
        };
        let first_of_list = |key: &str| {
            row.get(key)
                .map(Value::as_list_lossy)
                .and_then(|items| items.into_iter().next())
                .unwrap_or_default()
        };
        Self {
            name: text("name"),
            url: text("url"),
            category: first_of_list("category"),
            description: text("description"),
            tag: text("tag"),
        }
    }

    /// Validate every field; returns the full set of messages so the panel
    /// can mark each offending input at once.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters.".to_string());
        }
        if url::Url::parse(&self.url).is_err() {
            errors.url = Some("Please enter a valid URL.".to_string());
        }
        if self.category.is_empty() {
            errors.category = Some("Please select a category.".to_string());
        }
        if self.tag.chars().count() < 2 {
            errors.tag = Some("Please enter tags".to_string());
        }
        errors
    }

    /// Write the staged values into `row`. Call only after [`validate`]
    /// returned an empty error set.
    ///
    /// [`validate`]: EditForm::validate
    pub fn apply_to(&self, row: &mut Row) {
        row.set("name", Value::Text(self.name.clone()));
        row.set("url", Value::Text(self.url.clone()));
        row.set("category", Value::List(vec![self.category.clone()]));
        row.set("description", Value::Text(self.description.clone()));
        row.set("tag", Value::Text(self.tag.clone()));
    }
}
