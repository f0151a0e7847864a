use serde::{Deserialize, Serialize};

/// Color/typography theme for the grid surface. Host-overridable; the
/// defaults match the stock light palette.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct GridTheme {
    pub accent_color: String,
    pub accent_light: String,
    pub text_dark: String,
    pub text_medium: String,
    pub text_light: String,
    pub bg_cell: String,
    pub bg_cell_medium: String,
    pub bg_header: String,
    pub bg_header_has_focus: String,
    pub bg_header_hovered: String,
    pub border_color: String,
    pub link_color: String,
    pub cell_horizontal_padding: f32,
    pub cell_vertical_padding: f32,
    pub header_font_style: String,
    pub base_font_style: String,
    pub font_family: String,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            accent_color: "#4285F4".to_string(),
            accent_light: "#E8F0FE".to_string(),
            text_dark: "#202124".to_string(),
            text_medium: "#5F6368".to_string(),
            text_light: "#FFFFFF".to_string(),
            bg_cell: "#FFFFFF".to_string(),
            bg_cell_medium: "#F1F3F4".to_string(),
            bg_header: "#F8F9FA".to_string(),
            bg_header_has_focus: "#E8F0FE".to_string(),
            bg_header_hovered: "#F1F3F4".to_string(),
            border_color: "#DADCE0".to_string(),
            link_color: "#1A73E8".to_string(),
            cell_horizontal_padding: 12.0,
            cell_vertical_padding: 8.0,
            header_font_style: "600 13px".to_string(),
            base_font_style: "14px".to_string(),
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif".to_string(),
        }
    }
}

impl GridTheme {
    /// Full CSS font string for cell text.
    pub fn base_font(&self) -> String {
        format!("{} {}", self.base_font_style, self.font_family)
    }

    /// Full CSS font string for header text.
    pub fn header_font(&self) -> String {
        format!("{} {}", self.header_font_style, self.font_family)
    }
}
