//! Shared fixtures: a small bookmark table and a recording draw surface.
#![allow(dead_code)]

use gridview::layout::Rect;
use gridview::model::TableModel;
use gridview::render::{DrawSurface, TextAlign};
use gridview::types::{Column, ColumnType, Row, Value};

pub const CATEGORY_OPTIONS: [&str; 4] = ["Search", "Social", "Shopping", "News"];

/// The bookmark schema used across the interaction tests.
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID", ColumnType::Number).with_width(60.0),
        Column::new("name", "Name", ColumnType::Text),
        Column::new("url", "URL", ColumnType::Url),
        Column::new("featured", "Featured", ColumnType::Boolean),
        Column::new("category", "Category", ColumnType::Multiselect)
            .with_options(CATEGORY_OPTIONS.iter().map(ToString::to_string).collect()),
        Column::new("tags", "Tags", ColumnType::Multiselect),
        Column::new("added", "Added", ColumnType::Date),
        Column::new("logo", "Logo", ColumnType::Image),
        Column::new("details", "Details", ColumnType::Button),
    ]
}

pub fn sample_rows() -> Vec<Row> {
    vec![
        Row::new(1)
            .with_field("id", Value::Number(1.0))
            .with_field("name", Value::Text("Google".into()))
            .with_field("url", Value::Text("https://google.com".into()))
            .with_field("featured", Value::Bool(true))
            .with_field("category", Value::List(vec!["Search".into()]))
            .with_field("tags", Value::List(vec!["web".into(), "search".into()]))
            .with_field("added", Value::Text("2024-01-15".into()))
            .with_field("logo", Value::Text("google.png".into())),
        Row::new(2)
            .with_field("id", Value::Number(2.0))
            .with_field("name", Value::Text("Facebook".into()))
            .with_field("url", Value::Text("https://facebook.com".into()))
            .with_field("featured", Value::Bool(false))
            .with_field("category", Value::List(vec!["Social".into()]))
            .with_field("tags", Value::List(vec!["social".into()])),
        Row::new(3)
            .with_field("id", Value::Number(3.0))
            .with_field("name", Value::Text("Amazon".into()))
            .with_field("url", Value::Text("https://amazon.com".into()))
            .with_field("featured", Value::Bool(true))
            .with_field("category", Value::List(vec!["Shopping".into()])),
    ]
}

pub fn sample_model() -> TableModel {
    TableModel::new(sample_columns(), sample_rows())
}

/// One recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: String,
    },
    StrokeRect {
        rect: Rect,
        color: String,
    },
    RoundedRect {
        rect: Rect,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: String,
        align: TextAlign,
    },
    PushClip(Rect),
    PopClip,
}

/// Draw surface that records operations instead of painting, with a fixed
/// per-character advance so text measurement is deterministic.
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub char_width: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            char_width: 8.0,
        }
    }

    /// All recorded text strings, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rounded_rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RoundedRect { .. }))
            .count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: &str, _line_width: f32) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: &str) {
        self.ops.push(DrawOp::RoundedRect {
            rect,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str, _font: &str, align: TextAlign) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
            align,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    fn text_width(&mut self, text: &str, _font: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }
}
