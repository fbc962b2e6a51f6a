//! Reading JSON and YAML text into a [`Document`].

use super::model::{Document, Scalar};
use super::Format;
use crate::errors::{CfnDiffError, Result};
use serde_yaml::value::TaggedValue;

/// Parse `text`, auto-detecting its format.
///
/// JSON is attempted first; on failure the text is parsed as YAML. Failing
/// both is fatal and reported against `input` (a side label or a path).
///
/// # Errors
///
/// Returns [`CfnDiffError::Parse`] carrying both parser messages.
pub fn parse(input: &str, text: &str) -> Result<(Document, Format)> {
    let json_err = match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => return Ok((from_json_value(value), Format::Json)),
        Err(e) => e,
    };
    match load_yaml(text) {
        Ok(value) => Ok((from_yaml_value(value), Format::Yaml)),
        Err(yaml_err) => Err(CfnDiffError::Parse {
            input: input.to_string(),
            json_error: json_err.to_string(),
            yaml_error: yaml_err.to_string(),
        }),
    }
}

/// Load YAML with `<<` merge keys resolved.
fn load_yaml(text: &str) -> std::result::Result<serde_yaml::Value, serde_yaml::Error> {
    let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
    value.apply_merge()?;
    Ok(value)
}

pub fn from_json_value(value: serde_json::Value) -> Document {
    use serde_json::Value;
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Document::Scalar(json_number(&n)),
        Value::String(s) => Document::Scalar(Scalar::String(s)),
        Value::Array(items) => Document::Sequence(items.into_iter().map(from_json_value).collect()),
        Value::Object(map) => Document::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, from_json_value(v)))
                .collect(),
        ),
    }
}

/// Integers keep their exact digits at any size (serde_json is built with
/// `arbitrary_precision`); everything else is a float.
fn json_number(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        return Scalar::Integer(i);
    }
    let literal = n.to_string();
    if is_integer_literal(&literal) {
        Scalar::BigInteger(literal)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a YAML value, expanding short-form intrinsic tags
/// (`!Ref`, `!GetAtt`, `!Sub`, ...) into their long mapping form.
pub fn from_yaml_value(value: serde_yaml::Value) -> Document {
    use serde_yaml::Value;
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Document::Scalar(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Scalar::Integer(i),
            (None, Some(u)) => Scalar::BigInteger(u.to_string()),
            _ => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Document::Scalar(Scalar::String(s)),
        Value::Sequence(items) => {
            Document::Sequence(items.into_iter().map(from_yaml_value).collect())
        }
        Value::Mapping(map) => Document::Mapping(
            map.into_iter()
                .map(|(k, v)| (yaml_key(k), from_yaml_value(v)))
                .collect(),
        ),
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            expand_intrinsic(&tag.to_string(), from_yaml_value(value))
        }
    }
}

fn expand_intrinsic(tag: &str, value: Document) -> Document {
    let name = tag.trim_start_matches('!');
    let (key, value) = match name {
        "Ref" | "Condition" => (name.to_string(), value),
        "GetAtt" => ("Fn::GetAtt".to_string(), split_get_att(value)),
        _ => (format!("Fn::{}", name), value),
    };
    Document::Mapping(vec![(key, value)])
}

/// `!GetAtt Resource.Attr.Path` becomes `["Resource", "Attr.Path"]`.
fn split_get_att(value: Document) -> Document {
    match value {
        Document::Scalar(Scalar::String(s)) => match s.split_once('.') {
            Some((resource, attribute)) => Document::Sequence(vec![
                Document::string(resource),
                Document::string(attribute),
            ]),
            None => Document::string(s),
        },
        other => other,
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
