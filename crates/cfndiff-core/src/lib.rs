//! cfndiff core - format-independent comparison of stack templates
//!
//! Compares the template, parameters or tags of a deployed stack with a
//! local definition, ignoring differences that are only formatting:
//! JSON vs YAML, key order, quoting and scalar spelling.
//!
//! - [`document`]: format-independent document model, JSON/YAML in and out
//! - [`canonical`]: canonical encoder (recursive key sort, scalar coercion)
//! - [`params`]: parameter defaults, overrides and no-echo redaction
//! - [`diff`]: comparator and diff payload
//! - [`gateway`]: source of remote stack data
//! - [`driver`]: per-mode assembly of the two sides

pub mod canonical;
pub mod diff;
pub mod document;
pub mod driver;
pub mod errors;
pub mod gateway;
pub mod logging_facility;
pub mod params;

// Used by the logging macros
pub use cfndiff_core_types;

// Re-export commonly used types
pub use canonical::{canonicalize, encode, Source};
pub use diff::{compare, compare_templates, DiffMode, DiffOptions, DiffResult};
pub use document::{Document, Format, Scalar};
pub use driver::{compare_texts, run_diff, DiffRequest};
pub use errors::{CfnDiffError, ExError, ExErrorKind, Result};
pub use gateway::{SnapshotGateway, StackDataGateway, StackDescription};
pub use params::{ParameterSet, SensitiveNames};
