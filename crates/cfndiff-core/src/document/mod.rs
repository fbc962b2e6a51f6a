//! Format-independent document model.
//!
//! Templates, parameter sets and tag sets are read from either JSON or YAML
//! into a [`Document`], and written back out in whichever of the two the
//! caller asks for.

pub mod model;
pub mod parse;
pub mod render;

use serde::{Deserialize, Serialize};

pub use model::{Document, Scalar};
pub use parse::{from_json_value, from_yaml_value, parse};
pub use render::{render, render_template, to_json_value, to_yaml_value};

/// The two interchangeable serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Strict data-interchange format
    #[default]
    Json,
    /// Human-friendly structured text; a superset of JSON
    Yaml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
