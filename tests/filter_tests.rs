//! Tests for the search filter view.

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
    use gridview::types::Value;
    use test_case::test_case;

    #[test]
    fn empty_query_is_the_identity_view() {
        let model = sample_model();
        let view = FilterView::derive(&model, "");
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test_case("google", &[1]; "lowercase")]
    #[test_case("GOOGLE", &[1]; "uppercase")]
    #[test_case("GoOgLe", &[1]; "mixed case")]
    fn matching_is_case_insensitive(query: &str, expected: &[u64]) {
        let model = sample_model();
        let view = FilterView::derive(&model, query);
        assert_eq!(view.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn matches_any_field_not_just_name() {
        let model = sample_model();
        // "social" only appears in Facebook's category/tags.
        let view = FilterView::derive(&model, "social");
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn matches_the_row_id_string() {
        let model = sample_model();
        let view = FilterView::derive(&model, "3");
        assert!(view.iter().any(|id| id == 3));
    }

    #[test]
    fn preserves_store_order() {
        let model = sample_model();
        // Every sample row carries an https url.
        let view = FilterView::derive(&model, "https");
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let model = sample_model();
        let view = FilterView::derive(&model, "zzzzzz");
        assert!(view.is_empty());
        assert_eq!(view.row_id_at(0), None);
    }

    #[test]
    fn rederiving_after_an_edit_sees_the_new_value() {
        let mut model = sample_model();
        assert!(FilterView::derive(&model, "kagi").is_empty());
        model
            .set_field(2, "name", Value::Text("Kagi".into()))
            .unwrap();
        let view = FilterView::derive(&model, "kagi");
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![2]);
    }
}
