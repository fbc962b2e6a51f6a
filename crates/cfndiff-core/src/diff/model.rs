//! Diff output types.
//!
//! `DiffResult` serializes to the shape wrapping tools expect:
//! `{"diff": {"before": …, "after": …}, "changed": bool, …}`.

use crate::document::Format;
use serde::{Deserialize, Serialize};

/// What the two documents being compared represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffMode {
    /// Full template body
    #[default]
    Template,
    /// Effective stack parameters
    Parameters,
    /// Stack tags
    Tags,
}

impl DiffMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffMode::Template => "template",
            DiffMode::Parameters => "parameters",
            DiffMode::Tags => "tags",
        }
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral flags for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Output format of the payload
    pub format: Format,
    pub mode: DiffMode,
    /// Drop the top-level `Description` from both templates
    pub ignore_description: bool,
    /// Drop `NoEcho` parameters from both parameter sets
    pub ignore_hidden_params: bool,
}

/// One side of the payload, in the requested output format.
///
/// JSON payloads stay structured; YAML payloads are text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rendered {
    Yaml(String),
    Json(serde_json::Value),
}

impl Rendered {
    /// Text form, used for line diffs.
    pub fn text(&self) -> String {
        match self {
            Rendered::Yaml(text) => text.clone(),
            Rendered::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffPayload {
    /// Remote (currently deployed) side
    pub before: Rendered,
    /// Local (about to be applied) side
    pub after: Rendered,
}

/// SHA-256 of each side's canonical compact JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffIdentity {
    pub before_digest: String,
    pub after_digest: String,
}

/// Outcome of one comparison. Built once; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub diff: DiffPayload,
    /// `before != after` after canonicalization
    pub changed: bool,
    pub format: Format,
    pub identity: DiffIdentity,
}
