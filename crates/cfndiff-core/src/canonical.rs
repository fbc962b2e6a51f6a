//! Canonical Encoder.
//!
//! Brings a document into the one form used for equality:
//!
//! - every mapping's keys sorted lexicographically, at every depth (also
//!   inside sequences)
//! - every scalar leaf replaced by its string form, so `1` and `"1"` become
//!   indistinguishable
//!
//! A template re-serialized by the remote platform compares equal to its
//! source. A real `1` → `"1"` change is masked as well.
//!
//! Nulls are kept as nulls.

use crate::document::{parse, render, Document, Format, Scalar};
use crate::errors::Result;
use std::collections::BTreeMap;

/// Input to [`encode`]: raw text in either format, or a parsed document.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Raw text; `input` names it in parse errors.
    Text { input: &'a str, text: &'a str },
    Document(&'a Document),
}

/// Rebuild `doc` in canonical form. Pure; `doc` is not touched.
pub fn canonicalize(doc: &Document) -> Document {
    match doc {
        Document::Null => Document::Null,
        Document::Scalar(s) => Document::string(coerce_scalar(s)),
        Document::Sequence(items) => Document::Sequence(items.iter().map(canonicalize).collect()),
        Document::Mapping(entries) => {
            // Keys that collide after coercion keep the last value.
            let sorted: BTreeMap<&str, Document> = entries
                .iter()
                .map(|(k, v)| (k.as_str(), canonicalize(v)))
                .collect();
            Document::Mapping(
                sorted
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            )
        }
    }
}

/// String form of a scalar.
///
/// Floats use the shortest round-trip spelling and always keep a fraction or
/// exponent (`1.0`, `2.5`, `1e300`); non-finite floats use YAML's spelling.
pub fn coerce_scalar(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Integer(i) => i.to_string(),
        Scalar::BigInteger(digits) => digits.clone(),
        Scalar::Float(f) if f.is_nan() => ".nan".to_string(),
        Scalar::Float(f) if f.is_infinite() => {
            if *f > 0.0 { ".inf" } else { "-.inf" }.to_string()
        }
        Scalar::Float(f) => serde_json::Number::from_f64(*f)
            .map(|n| n.to_string())
            .unwrap_or_else(|| f.to_string()),
        Scalar::String(s) => s.clone(),
    }
}

/// Parse (if needed) and canonicalize, without rendering.
///
/// # Errors
///
/// `CfnDiffError::Parse` when text is neither JSON nor YAML.
pub fn canonical_form(source: Source<'_>) -> Result<Document> {
    match source {
        Source::Text { input, text } => {
            let (doc, detected) = parse(input, text)?;
            tracing::debug!(input, detected = %detected, "parsed input");
            Ok(canonicalize(&doc))
        }
        Source::Document(doc) => Ok(canonicalize(doc)),
    }
}

/// Canonicalize `source` and render it in `format`.
///
/// # Errors
///
/// `CfnDiffError::Parse` for unparseable text, `CfnDiffError::Serialization`
/// if rendering fails.
pub fn encode(source: Source<'_>, format: Format) -> Result<String> {
    render(&canonical_form(source)?, format)
}
