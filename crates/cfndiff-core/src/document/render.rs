//! Writing a [`Document`] back out as JSON or YAML.
//!
//! JSON always uses the long intrinsic form (`{"Ref": "X"}`). Templates
//! rendered as YAML fold single-key intrinsic mappings back into short-form
//! tags (`!Ref X`), the inverse of what [`super::parse`] expands. Parameter
//! and tag sets are never folded.

use super::model::{Document, Scalar};
use super::Format;
use crate::canonical::coerce_scalar;
use crate::errors::Result;
use serde_yaml::value::{Tag, TaggedValue};

/// Render `doc` as pretty JSON or as YAML, without intrinsic folding.
///
/// # Errors
///
/// Returns `CfnDiffError::Serialization` if the serializer rejects the tree.
pub fn render(doc: &Document, format: Format) -> Result<String> {
    render_with(doc, format, false)
}

/// Render a template body. YAML output uses short-form intrinsic tags.
///
/// # Errors
///
/// Returns `CfnDiffError::Serialization` if the serializer rejects the tree.
pub fn render_template(doc: &Document, format: Format) -> Result<String> {
    render_with(doc, format, true)
}

fn render_with(doc: &Document, format: Format, fold_intrinsics: bool) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&to_json_value(doc))?),
        Format::Yaml => Ok(serde_yaml::to_string(&to_yaml_value(doc, fold_intrinsics))?),
    }
}

pub fn to_json_value(doc: &Document) -> serde_json::Value {
    use serde_json::Value;
    match doc {
        Document::Null => Value::Null,
        Document::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        Document::Scalar(Scalar::Integer(i)) => Value::from(*i),
        Document::Scalar(Scalar::BigInteger(digits)) => digits
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::String(digits.clone())),
        Document::Scalar(Scalar::Float(f)) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(coerce_scalar(&Scalar::Float(*f)))),
        Document::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        Document::Sequence(items) => Value::Array(items.iter().map(to_json_value).collect()),
        Document::Mapping(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), to_json_value(v)))
                .collect(),
        ),
    }
}

/// YAML tree for `doc`; `fold_intrinsics` turns `{"Ref": x}` into `!Ref x`.
pub fn to_yaml_value(doc: &Document, fold_intrinsics: bool) -> serde_yaml::Value {
    use serde_yaml::Value;
    match doc {
        Document::Null => Value::Null,
        Document::Scalar(Scalar::Bool(b)) => Value::Bool(*b),
        Document::Scalar(Scalar::Integer(i)) => Value::Number((*i).into()),
        // serde_yaml numbers stop at u64
        Document::Scalar(Scalar::BigInteger(digits)) => digits
            .parse::<u64>()
            .map(|u| Value::Number(u.into()))
            .unwrap_or_else(|_| Value::String(digits.clone())),
        Document::Scalar(Scalar::Float(f)) => Value::Number((*f).into()),
        Document::Scalar(Scalar::String(s)) => Value::String(s.clone()),
        Document::Sequence(items) => Value::Sequence(
            items
                .iter()
                .map(|item| to_yaml_value(item, fold_intrinsics))
                .collect(),
        ),
        Document::Mapping(entries) => {
            if let (true, [(key, value)]) = (fold_intrinsics, entries.as_slice()) {
                if let Some(tagged) = short_form(key, value) {
                    return tagged;
                }
            }
            Value::Mapping(
                entries
                    .iter()
                    .map(|(k, v)| (Value::String(k.clone()), to_yaml_value(v, fold_intrinsics)))
                    .collect(),
            )
        }
    }
}

fn short_form(key: &str, value: &Document) -> Option<serde_yaml::Value> {
    let (name, operand) = match key {
        "Ref" | "Condition" => (key, to_yaml_value(value, true)),
        // A scalar operand would be split on re-read; keep the long form
        "Fn::GetAtt" => ("GetAtt", get_att_operand(value)?),
        _ => {
            let name = key.strip_prefix("Fn::")?;
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                return None;
            }
            (name, to_yaml_value(value, true))
        }
    };
    Some(serde_yaml::Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(name),
        value: operand,
    })))
}

/// `["Resource", "Attr.Path"]` folds back to `Resource.Attr.Path` when the
/// resource name itself has no dot, so the fold is reversible. Scalars are
/// not foldable.
fn get_att_operand(value: &Document) -> Option<serde_yaml::Value> {
    match value {
        Document::Sequence(items) => match items.as_slice() {
            [Document::Scalar(Scalar::String(resource)), Document::Scalar(Scalar::String(attribute))]
                if !resource.contains('.') =>
            {
                Some(serde_yaml::Value::String(format!("{}.{}", resource, attribute)))
            }
            _ => Some(to_yaml_value(value, true)),
        },
        Document::Scalar(_) => None,
        _ => Some(to_yaml_value(value, true)),
    }
}
