//! Tests for the custom cell renderers: dispatch, painting, activation.

mod common;

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use crate::common::{DrawOp, RecordingSurface};
    use gridview::layout::Rect;
    use gridview::render::{
        renderer_for, Activation, ButtonRenderer, CellRenderer, TagsRenderer, TextAlign,
    };
    use gridview::types::{Cell, GridTheme};

    fn tags_cell(selected: &[&str]) -> Cell {
        Cell::Tags {
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            selected: selected.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn dispatch_covers_exactly_the_custom_cells() {
        let button = Cell::Button {
            label: "View Details".into(),
            row_id: 1,
        };
        assert!(renderer_for(&button).is_some());
        assert!(renderer_for(&tags_cell(&["a"])).is_some());

        assert!(renderer_for(&Cell::Text {
            display: "x".into()
        })
        .is_none());
        assert!(renderer_for(&Cell::Boolean { value: true }).is_none());
        assert!(renderer_for(&Cell::Bubble { values: vec![] }).is_none());
        assert!(renderer_for(&Cell::Loading).is_none());
    }

    #[test]
    fn button_paints_a_pill_with_a_centered_label() {
        let mut surface = RecordingSurface::new();
        let theme = GridTheme::default();
        let cell = Cell::Button {
            label: "View Details".into(),
            row_id: 7,
        };
        ButtonRenderer.paint(&mut surface, Rect::new(0.0, 0.0, 150.0, 35.0), &cell, &theme);

        // The pill is an accent-colored rounded rect inset in the cell.
        let Some(DrawOp::RoundedRect { rect, color, .. }) = surface
            .ops
            .iter()
            .find(|op| matches!(op, DrawOp::RoundedRect { .. }))
        else {
            panic!("no pill painted");
        };
        assert_eq!(*color, theme.accent_color);
        assert!(rect.w < 150.0 && rect.h < 35.0);

        let Some(DrawOp::Text {
            text,
            x,
            color,
            align,
            ..
        }) = surface
            .ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { .. }))
        else {
            panic!("no text painted");
        };
        assert_eq!(text, "View Details");
        assert_eq!(*align, TextAlign::Center);
        assert_eq!(*x, 75.0);
        assert_eq!(*color, theme.text_light);
    }

    #[test]
    fn button_activation_inspects_its_row() {
        let cell = Cell::Button {
            label: "View Details".into(),
            row_id: 42,
        };
        assert_eq!(
            ButtonRenderer.on_activate(&cell),
            Some(Activation::InspectRow(42))
        );
    }

    #[test]
    fn tags_paint_one_chip_per_fitting_value() {
        let mut surface = RecordingSurface::new();
        let theme = GridTheme::default();
        TagsRenderer.paint(
            &mut surface,
            Rect::new(0.0, 0.0, 300.0, 35.0),
            &tags_cell(&["a", "b"]),
            &theme,
        );
        assert_eq!(surface.rounded_rect_count(), 2);
        assert_eq!(surface.texts(), vec!["a", "b"]);
    }

    #[test]
    fn tags_truncate_with_ellipsis_when_out_of_room() {
        let mut surface = RecordingSurface::new();
        let theme = GridTheme::default();
        // char_width 8: each 4-char chip is 44px wide; a 100px cell fits one.
        TagsRenderer.paint(
            &mut surface,
            Rect::new(0.0, 0.0, 100.0, 35.0),
            &tags_cell(&["aaaa", "bbbb", "cccc"]),
            &theme,
        );
        assert_eq!(surface.rounded_rect_count(), 1);
        assert_eq!(surface.texts(), vec!["aaaa", "…"]);
    }

    #[test]
    fn tags_painting_is_clipped_to_the_cell() {
        let mut surface = RecordingSurface::new();
        let theme = GridTheme::default();
        let rect = Rect::new(10.0, 20.0, 120.0, 35.0);
        TagsRenderer.paint(&mut surface, rect, &tags_cell(&["a"]), &theme);
        assert!(surface.ops.contains(&DrawOp::PushClip(rect)));
        assert_eq!(surface.ops.last(), Some(&DrawOp::PopClip));
    }

    #[test]
    fn tags_activation_opens_an_editor_seeded_from_the_cell() {
        let cell = tags_cell(&["b", "d"]);
        let Some(Activation::OpenEditor(editor)) = TagsRenderer.on_activate(&cell) else {
            panic!("expected editor activation");
        };
        assert_eq!(editor.options().len(), 4);
        assert_eq!(editor.selected(), ["b".to_string(), "d".to_string()]);
    }

    #[test]
    fn renderers_ignore_foreign_payloads() {
        let mut surface = RecordingSurface::new();
        let theme = GridTheme::default();
        let text = Cell::Text {
            display: "x".into(),
        };
        ButtonRenderer.paint(&mut surface, Rect::new(0.0, 0.0, 10.0, 10.0), &text, &theme);
        assert!(surface.ops.is_empty());
        assert_eq!(ButtonRenderer.on_activate(&text), None);
    }
}
