//! Property tests for the canonical encoder.

use cfndiff_core::canonical::{canonical_form, canonicalize, encode, Source};
use cfndiff_core::document::render;
use cfndiff_core::{Document, Format, Scalar};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Document> {
    prop_oneof![
        Just(Document::Null),
        any::<bool>().prop_map(|b| Document::Scalar(Scalar::Bool(b))),
        (-1000i64..1000).prop_map(|i| Document::Scalar(Scalar::Integer(i))),
        (-1.0e6f64..1.0e6).prop_map(|f| Document::Scalar(Scalar::Float(f))),
        "[a-zA-Z0-9 ._-]{0,8}".prop_map(Document::string),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Document::Sequence),
            prop::collection::btree_map("[A-Za-z][A-Za-z0-9]{0,5}", inner, 0..4)
                .prop_map(|m| Document::Mapping(m.into_iter().collect())),
        ]
    })
}

/// Reverse the entry order of every mapping, at every depth.
fn reverse_all(doc: &Document) -> Document {
    match doc {
        Document::Mapping(entries) => Document::Mapping(
            entries
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), reverse_all(v)))
                .collect(),
        ),
        Document::Sequence(items) => Document::Sequence(items.iter().map(reverse_all).collect()),
        other => other.clone(),
    }
}

fn text(t: &str) -> Source<'_> {
    Source::Text { input: "prop", text: t }
}

proptest! {
    #[test]
    fn prop_canonicalize_is_idempotent(doc in document()) {
        let once = canonicalize(&doc);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn prop_canonical_text_is_a_fixed_point(doc in document()) {
        for format in [Format::Json, Format::Yaml] {
            let canonical = encode(Source::Document(&doc), format).unwrap();
            let again = encode(text(&canonical), format).unwrap();
            prop_assert_eq!(again, canonical);
        }
    }

    #[test]
    fn prop_json_and_yaml_inputs_agree(doc in document()) {
        let as_json = render(&doc, Format::Json).unwrap();
        let as_yaml = render(&doc, Format::Yaml).unwrap();
        prop_assert_eq!(
            canonical_form(text(&as_json)).unwrap(),
            canonical_form(text(&as_yaml)).unwrap()
        );
    }

    #[test]
    fn prop_key_order_is_irrelevant(doc in document()) {
        prop_assert_eq!(canonicalize(&reverse_all(&doc)), canonicalize(&doc));
    }

    #[test]
    fn prop_integer_and_string_spellings_collapse(n in any::<i64>()) {
        let as_number = format!(r#"{{"a": {}}}"#, n);
        let as_string = format!(r#"{{"a": "{}"}}"#, n);
        prop_assert_eq!(
            encode(text(&as_number), Format::Yaml).unwrap(),
            encode(text(&as_string), Format::Yaml).unwrap()
        );
    }

    #[test]
    fn prop_unsigned_spellings_collapse(n in any::<u64>()) {
        let as_number = format!(r#"{{"a": {}}}"#, n);
        let as_string = format!(r#"{{"a": "{}"}}"#, n);
        prop_assert_eq!(
            encode(text(&as_number), Format::Json).unwrap(),
            encode(text(&as_string), Format::Json).unwrap()
        );
    }
}

#[test]
fn test_shuffled_nested_keys_same_rendering() {
    let a = r#"{"Resources": {"B": {"Type": "T", "Properties": {"y": 1, "x": 2}}, "A": {"Type": "T"}}}"#;
    let b = "Resources:\n  A:\n    Type: T\n  B:\n    Properties:\n      x: 2\n      y: 1\n    Type: T\n";
    assert_eq!(
        encode(text(a), Format::Json).unwrap(),
        encode(text(b), Format::Json).unwrap()
    );
}
