//! Parameter Resolver.
//!
//! The remote platform applies a template's declared `Default` to every
//! parameter the caller leaves unset, and it never reveals the value of a
//! `NoEcho` parameter. To compare like with like, the local side is rebuilt
//! as `defaults ∪ overrides` and, on request, no-echo names are dropped from
//! both sides.

use crate::canonical::coerce_scalar;
use crate::document::{to_json_value, Document};
use crate::errors::{CfnDiffError, Result};
use cfndiff_core_types::Sensitive;
use std::collections::{BTreeMap, BTreeSet};

/// Parameter name → value.
pub type ParameterSet = BTreeMap<String, String>;

/// Names of parameters declared `NoEcho: true`.
pub type SensitiveNames = BTreeSet<String>;

/// Names of every declared parameter whose `NoEcho` flag, as a lower-cased
/// string, equals `"true"`. Absent flag means not sensitive.
///
/// `declarations` is the template's `Parameters` block; anything that is
/// not a mapping yields an empty set.
pub fn extract_sensitive_names(declarations: &Document) -> SensitiveNames {
    declarations
        .as_mapping()
        .unwrap_or_default()
        .iter()
        .filter(|(_, attrs)| {
            attrs
                .get("NoEcho")
                .map(|flag| value_to_string(flag).to_lowercase() == "true")
                .unwrap_or(false)
        })
        .map(|(name, _)| name.clone())
        .collect()
}

/// Declared default of every parameter that has one.
pub fn extract_defaults(declarations: &Document) -> ParameterSet {
    declarations
        .as_mapping()
        .unwrap_or_default()
        .iter()
        .filter_map(|(name, attrs)| {
            attrs
                .get("Default")
                .map(|default| (name.clone(), value_to_string(default)))
        })
        .collect()
}

/// Union of both sets; `overrides` wins on shared keys.
pub fn merge(defaults: &ParameterSet, overrides: &ParameterSet) -> ParameterSet {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Copy of `params` without any name in `sensitive`.
pub fn redact(params: &ParameterSet, sensitive: &SensitiveNames) -> ParameterSet {
    params
        .iter()
        .filter(|(name, value)| {
            let hidden = sensitive.contains(name.as_str());
            if hidden {
                tracing::debug!(param = %name, value = %Sensitive::new(value), "redacted");
            }
            !hidden
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Read a parameter or tag mapping (e.g. a parsed `--parameters-file`).
///
/// A null document is an empty set.
///
/// # Errors
///
/// `CfnDiffError::InvalidShape` when `doc` is neither a mapping nor null.
pub fn set_from_document(input: &str, doc: &Document) -> Result<ParameterSet> {
    match doc {
        Document::Null => Ok(ParameterSet::new()),
        Document::Mapping(entries) => Ok(entries
            .iter()
            .map(|(k, v)| (k.clone(), value_to_string(v)))
            .collect()),
        _ => Err(CfnDiffError::InvalidShape {
            input: input.to_string(),
            message: "expected a mapping of name to value".to_string(),
        }),
    }
}

/// Build a set from the remote API's list-of-pairs shape, e.g.
/// `[{"ParameterKey": "Env", "ParameterValue": "prod"}]`.
///
/// Entries missing either field are skipped.
pub fn pairs_to_set(items: &Document, key_field: &str, value_field: &str) -> ParameterSet {
    let Document::Sequence(items) = items else {
        return ParameterSet::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let key = item.get(key_field)?;
            let value = item.get(value_field)?;
            Some((value_to_string(key), value_to_string(value)))
        })
        .collect()
}

/// A parameter set as a mapping document, ready for the comparator.
pub fn to_document(params: &ParameterSet) -> Document {
    Document::Mapping(
        params
            .iter()
            .map(|(k, v)| (k.clone(), Document::string(v.clone())))
            .collect(),
    )
}

/// Flatten a value to the string the platform would report for it.
///
/// Lists join with commas (`CommaDelimitedList`); mappings fall back to
/// compact JSON.
fn value_to_string(value: &Document) -> String {
    match value {
        Document::Null => String::new(),
        Document::Scalar(s) => coerce_scalar(s),
        Document::Sequence(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Document::Mapping(_) => to_json_value(value).to_string(),
    }
}
