//! Comparator / diff builder.
//!
//! Compares two documents after canonicalization and produces a
//! before/after payload plus a `changed` flag.
//!
//! ## Entry point
//!
//! ```
//! use cfndiff_core::diff::compare;
//! use cfndiff_core::document::{parse, Format};
//!
//! let (before, _) = parse("before", r#"{"A": 1, "B": 2}"#).unwrap();
//! let (after, _) = parse("after", "B: '2'\nA: '1'\n").unwrap();
//! let result = compare(&before, &after, Format::Yaml).unwrap();
//! assert!(!result.changed);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical payloads.
//! - **Format independence**: JSON vs YAML, key order and scalar spelling
//!   never register as a change.
//! - **Shared by all modes**: templates, parameter sets and tag sets differ
//!   only in the documents fed in.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{compare, compare_templates, strip_description};
pub use human_summary::render_human_summary;
pub use model::{DiffIdentity, DiffMode, DiffOptions, DiffPayload, DiffResult, Rendered};
