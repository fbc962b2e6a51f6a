//! Stack Data Gateway.
//!
//! Supplies the remote side of a comparison: a stack's description
//! (outputs, parameters, tags) and its deployed template body.
//!
//! Fetching never fails the run. Any error is logged and degrades to an
//! empty result, so an unreachable stack simply shows up as "everything
//! changed".

use crate::document::{from_json_value, parse, Document, Scalar};
use crate::params::{pairs_to_set, ParameterSet};
use crate::errors::{CfnDiffError, ExError, Result};
use cfndiff_core_types::schema::{
    EVENT_DEGRADED, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP, FIELD_STACK_NAME,
};
use std::path::{Path, PathBuf};

/// Flattened stack description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackDescription {
    pub outputs: ParameterSet,
    pub parameters: ParameterSet,
    pub tags: ParameterSet,
}

impl StackDescription {
    /// Flatten one element of a DescribeStacks `Stacks` list.
    pub fn from_stack(stack: &Document) -> Self {
        let field = |name: &str| stack.get(name).cloned().unwrap_or(Document::Null);
        Self {
            outputs: pairs_to_set(&field("Outputs"), "OutputKey", "OutputValue"),
            parameters: pairs_to_set(&field("Parameters"), "ParameterKey", "ParameterValue"),
            tags: pairs_to_set(&field("Tags"), "Key", "Value"),
        }
    }
}

/// Source of remote stack data.
pub trait StackDataGateway {
    /// Description of `stack_name`, or an empty one on any error.
    fn describe_stack(&self, stack_name: &str) -> StackDescription;

    /// Deployed template of `stack_name`, or an empty mapping on any error.
    fn template_body(&self, stack_name: &str) -> Document;
}

/// Gateway over saved API responses.
///
/// Reads `<dir>/<stack>.describe.json` (a DescribeStacks response) and
/// `<dir>/<stack>.template.json` (a GetTemplate response), as written by e.g.
/// `aws cloudformation describe-stacks --stack-name <stack> > <stack>.describe.json`.
#[derive(Debug, Clone)]
pub struct SnapshotGateway {
    dir: PathBuf,
}

impl SnapshotGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn describe_path(&self, stack_name: &str) -> PathBuf {
        self.dir.join(format!("{}.describe.json", stack_name))
    }

    pub fn template_path(&self, stack_name: &str) -> PathBuf {
        self.dir.join(format!("{}.template.json", stack_name))
    }

    fn read_response(stack_name: &str, path: &Path) -> Result<Document> {
        let text = std::fs::read_to_string(path).map_err(|e| CfnDiffError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| CfnDiffError::Gateway {
                stack_name: stack_name.to_string(),
                message: format!("{} is not a JSON response: {}", path.display(), e),
            })?;
        Ok(from_json_value(value))
    }

    fn fetch_description(&self, stack_name: &str) -> Result<StackDescription> {
        let response = Self::read_response(stack_name, &self.describe_path(stack_name))?;
        let shape_error = |message: &str| CfnDiffError::Gateway {
            stack_name: stack_name.to_string(),
            message: message.to_string(),
        };
        match response.get("Stacks") {
            Some(Document::Sequence(stacks)) => stacks
                .first()
                .map(StackDescription::from_stack)
                .ok_or_else(|| shape_error("empty Stacks list")),
            _ => Err(shape_error("response has no Stacks list")),
        }
    }

    fn fetch_template(&self, stack_name: &str) -> Result<Document> {
        let path = self.template_path(stack_name);
        let response = Self::read_response(stack_name, &path)?;
        match response.get("TemplateBody") {
            // YAML-authored stacks come back as a string body
            Some(Document::Scalar(Scalar::String(body))) => {
                parse(&path.display().to_string(), body).map(|(doc, _)| doc)
            }
            Some(body @ Document::Mapping(_)) => Ok(body.clone()),
            _ => Err(CfnDiffError::Gateway {
                stack_name: stack_name.to_string(),
                message: "response has no TemplateBody".to_string(),
            }),
        }
    }
}

/// Log a fetch failure that the caller is about to replace with an empty result.
fn degraded(op: &str, stack_name: &str, err: CfnDiffError, what: &str) {
    let ex_err: ExError = err.into();
    tracing::warn!(
        { FIELD_OP } = op,
        { FIELD_EVENT } = EVENT_DEGRADED,
        { FIELD_STACK_NAME } = stack_name,
        { FIELD_ERR_KIND } = ?ex_err.kind(),
        { FIELD_ERR_CODE } = ex_err.code(),
        reason = %ex_err,
        "stack {} unavailable, comparing against empty",
        what
    );
}

impl StackDataGateway for SnapshotGateway {
    fn describe_stack(&self, stack_name: &str) -> StackDescription {
        self.fetch_description(stack_name).unwrap_or_else(|err| {
            degraded("describe_stack", stack_name, err, "description");
            StackDescription::default()
        })
    }

    fn template_body(&self, stack_name: &str) -> Document {
        self.fetch_template(stack_name).unwrap_or_else(|err| {
            degraded("template_body", stack_name, err, "template");
            Document::empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &serde_json::Value) {
        std::fs::write(dir.path().join(name), body.to_string()).unwrap();
    }

    #[test]
    fn test_describe_flattens_first_stack() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "web.describe.json",
            &serde_json::json!({
                "Stacks": [{
                    "StackName": "web",
                    "Parameters": [{"ParameterKey": "Env", "ParameterValue": "prod"}],
                    "Tags": [{"Key": "team", "Value": "infra"}],
                    "Outputs": [{"OutputKey": "Url", "OutputValue": "https://x"}]
                }]
            }),
        );
        let gateway = SnapshotGateway::new(dir.path());
        let desc = gateway.describe_stack("web");
        assert_eq!(desc.parameters.get("Env").map(String::as_str), Some("prod"));
        assert_eq!(desc.tags.get("team").map(String::as_str), Some("infra"));
        assert_eq!(desc.outputs.get("Url").map(String::as_str), Some("https://x"));
    }

    #[test]
    fn test_missing_files_degrade_to_empty() {
        let dir = TempDir::new().unwrap();
        let gateway = SnapshotGateway::new(dir.path());
        assert_eq!(gateway.describe_stack("ghost"), StackDescription::default());
        assert_eq!(gateway.template_body("ghost"), Document::empty());
    }

    #[test]
    fn test_empty_stacks_list_degrades() {
        let dir = TempDir::new().unwrap();
        write(&dir, "web.describe.json", &serde_json::json!({"Stacks": []}));
        let gateway = SnapshotGateway::new(dir.path());
        assert_eq!(gateway.describe_stack("web"), StackDescription::default());
        match gateway.fetch_description("web") {
            Err(CfnDiffError::Gateway { stack_name, message }) => {
                assert_eq!(stack_name, "web");
                assert_eq!(message, "empty Stacks list");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let gateway = SnapshotGateway::new(dir.path());
        let err: ExError = gateway.fetch_template("ghost").unwrap_err().into();
        assert_eq!(err.code(), "ERR_IO");
        assert!(err.input().unwrap().ends_with("ghost.template.json"));
    }

    #[test]
    fn test_non_json_response_is_a_gateway_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("web.describe.json"), "not json").unwrap();
        let gateway = SnapshotGateway::new(dir.path());
        let err: ExError = gateway.fetch_description("web").unwrap_err().into();
        assert_eq!(err.code(), "ERR_GATEWAY");
        assert_eq!(err.input(), Some("web"));
    }

    #[test]
    fn test_template_body_as_yaml_string() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "web.template.json",
            &serde_json::json!({"TemplateBody": "Description: web\nResources:\n  B:\n    Type: AWS::S3::Bucket\n"}),
        );
        let gateway = SnapshotGateway::new(dir.path());
        let body = gateway.template_body("web");
        assert_eq!(body.get("Description"), Some(&Document::string("web")));
    }

    #[test]
    fn test_template_body_as_object() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "web.template.json",
            &serde_json::json!({"TemplateBody": {"Resources": {}}}),
        );
        let gateway = SnapshotGateway::new(dir.path());
        assert!(gateway.template_body("web").get("Resources").is_some());
    }

    #[test]
    fn test_unparseable_template_body_degrades() {
        let dir = TempDir::new().unwrap();
        write(&dir, "web.template.json", &serde_json::json!({"TemplateBody": "A: [1"}));
        let gateway = SnapshotGateway::new(dir.path());
        assert_eq!(gateway.template_body("web"), Document::empty());
        assert!(matches!(
            gateway.fetch_template("web"),
            Err(CfnDiffError::Parse { .. })
        ));
    }
}
