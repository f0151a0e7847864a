//! Tests for cell projection: (row, column) → typed display cell.

mod common;

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use crate::common::sample_model;
    use gridview::model::FilterView;
    use gridview::project::{project, BUTTON_LABEL};
    use gridview::types::{Cell, Column, ColumnType, Row, Value};
    use gridview::TableModel;

    fn identity_view(model: &TableModel) -> FilterView {
        FilterView::derive(model, "")
    }

    #[test]
    fn out_of_range_coordinates_project_loading() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(project(&model, &view, 99, 0), Cell::Loading);
        assert_eq!(project(&model, &view, 0, 99), Cell::Loading);
    }

    #[test]
    fn text_column_projects_display_string() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(
            project(&model, &view, 1, 0),
            Cell::Text {
                display: "Google".to_string()
            }
        );
    }

    #[test]
    fn number_column_displays_without_trailing_zeros() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(
            project(&model, &view, 0, 1),
            Cell::Number {
                value: 2.0,
                display: "2".to_string()
            }
        );
    }

    #[test]
    fn url_column_projects_uri_cell() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(
            project(&model, &view, 2, 2),
            Cell::Uri {
                target: "https://amazon.com".to_string()
            }
        );
    }

    #[test]
    fn button_column_binds_row_id_without_reading_fields() {
        let model = sample_model();
        let view = identity_view(&model);
        // No "details" field exists on any row; the button projects anyway.
        assert_eq!(
            project(&model, &view, 8, 2),
            Cell::Button {
                label: BUTTON_LABEL.to_string(),
                row_id: 3
            }
        );
    }

    #[test]
    fn missing_field_projects_empty_text() {
        let model = sample_model();
        let view = identity_view(&model);
        // Row 3 has no "added" value.
        assert_eq!(
            project(&model, &view, 6, 2),
            Cell::Text {
                display: String::new()
            }
        );
    }

    #[test]
    fn missing_boolean_field_projects_false() {
        let columns = vec![Column::new("flag", "Flag", ColumnType::Boolean)];
        let model = TableModel::new(columns, vec![Row::new(1)]);
        let view = identity_view(&model);
        assert_eq!(project(&model, &view, 0, 0), Cell::Boolean { value: false });
    }

    #[test]
    fn missing_multiselect_field_projects_empty_selection() {
        // Row 3 has no "tags" value; the bubble cell is just empty.
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(
            project(&model, &view, 5, 2),
            Cell::Bubble { values: Vec::new() }
        );
    }

    #[test]
    fn multiselect_with_options_projects_tags() {
        let model = sample_model();
        let view = identity_view(&model);
        let cell = project(&model, &view, 4, 0);
        let Cell::Tags { options, selected } = cell else {
            panic!("expected tags cell, got {cell:?}");
        };
        assert_eq!(options.len(), 4);
        assert_eq!(selected, vec!["Search".to_string()]);
    }

    #[test]
    fn multiselect_without_options_projects_bubbles() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(
            project(&model, &view, 5, 0),
            Cell::Bubble {
                values: vec!["web".to_string(), "search".to_string()]
            }
        );
    }

    #[test]
    fn boolean_projection_is_truthy_over_text() {
        let columns = vec![Column::new("flag", "Flag", ColumnType::Boolean)];
        let rows = vec![
            Row::new(1).with_field("flag", Value::Text("false".into())),
            Row::new(2).with_field("flag", Value::Text(String::new())),
        ];
        let model = TableModel::new(columns, rows);
        let view = identity_view(&model);
        // Non-empty text is truthy, even the string "false".
        assert_eq!(project(&model, &view, 0, 0), Cell::Boolean { value: true });
        assert_eq!(project(&model, &view, 0, 1), Cell::Boolean { value: false });
    }

    #[test]
    fn projection_is_stable_between_edits() {
        let model = sample_model();
        let view = identity_view(&model);
        assert_eq!(project(&model, &view, 1, 0), project(&model, &view, 1, 0));
    }
}
