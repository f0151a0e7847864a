//! Browser smoke test for the exported view: construction over a real
//! canvas, painting, and the JS-facing edit entry points.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::wasm_bindgen_test_configure;

wasm_bindgen_test_configure!(run_in_browser);

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use gridview::types::{Column, ColumnType, Row, Value};
    use gridview::GridView;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn canvas() -> web_sys::HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: web_sys::HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(400);
        canvas.set_height(300);
        canvas
    }

    #[wasm_bindgen_test]
    fn grid_view_builds_renders_and_commits_edits() {
        let columns = serde_wasm_bindgen::to_value(&vec![
            Column::new("name", "Name", ColumnType::Text),
            Column::new("done", "Done", ColumnType::Boolean),
        ])
        .unwrap();
        let rows = serde_wasm_bindgen::to_value(&vec![
            Row::new(1).with_field("name", Value::Text("alpha".into()))
        ])
        .unwrap();

        let mut view = GridView::new(canvas(), columns, rows, 1.0).unwrap();
        view.render();

        assert!(view.commit_edit(0, 0, JsValue::from_str("beta")).unwrap());
        assert_eq!(view.copy_cell(0, 0), "beta");

        // Boolean cells reject the overlay path.
        assert!(!view.commit_edit(1, 0, JsValue::from_bool(true)).unwrap());

        assert!(view.rows().is_ok());
    }
}
