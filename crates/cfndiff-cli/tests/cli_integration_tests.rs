//! CLI integration tests
//!
//! Run the built `cfndiff` binary against files in a scratch directory and
//! check stdout, stderr and the exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TEMPLATE_YAML: &str = "\
Description: web stack
Parameters:
  Env:
    Type: String
    Default: dev
  DbPassword:
    Type: String
    NoEcho: true
Resources:
  Bucket:
    Type: AWS::S3::Bucket
    Properties:
      BucketName: !Ref Env
";

const TEMPLATE_JSON: &str = r#"{
  "Resources": {
    "Bucket": {
      "Properties": {"BucketName": {"Ref": "Env"}},
      "Type": "AWS::S3::Bucket"
    }
  },
  "Parameters": {
    "DbPassword": {"NoEcho": "true", "Type": "String"},
    "Env": {"Default": "dev", "Type": "String"}
  },
  "Description": "web stack"
}"#;

const DESCRIBE: &str = r#"{
  "Stacks": [
    {
      "StackName": "web",
      "Parameters": [
        {"ParameterKey": "Env", "ParameterValue": "prod"},
        {"ParameterKey": "DbPassword", "ParameterValue": "****"}
      ],
      "Tags": [
        {"Key": "team", "Value": "core"},
        {"Key": "cost-center", "Value": "42"}
      ]
    }
  ]
}"#;

fn cfndiff(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cfndiff"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Scratch dir with a local template, a snapshot dir and a deployed template
fn setup(deployed_template: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("template.yml"), TEMPLATE_YAML).unwrap();
    fs::write(temp_dir.path().join("template.json"), TEMPLATE_JSON).unwrap();

    let snapshots = temp_dir.path().join("snapshots");
    fs::create_dir_all(&snapshots).unwrap();
    fs::write(snapshots.join("web.describe.json"), DESCRIBE).unwrap();
    let body = serde_json::json!({ "TemplateBody": deployed_template });
    fs::write(snapshots.join("web.template.json"), body.to_string()).unwrap();
    temp_dir
}

#[test]
fn test_files_json_and_yaml_equivalent() {
    let temp_dir = setup(TEMPLATE_YAML);

    let output = cfndiff(
        temp_dir.path(),
        &["files", "template.json", "template.yml", "--exit-code"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("No changes (format: json)"));
}

#[test]
fn test_files_changed_with_exit_code() {
    let temp_dir = setup(TEMPLATE_YAML);
    fs::write(
        temp_dir.path().join("edited.yml"),
        TEMPLATE_YAML.replace("Default: dev", "Default: test"),
    )
    .unwrap();

    let output = cfndiff(
        temp_dir.path(),
        &[
            "files",
            "template.yml",
            "edited.yml",
            "--format",
            "yaml",
            "--exit-code",
        ],
    );

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Changes detected"));
    assert!(out.contains("--- before"));
    assert!(out.contains("+++ after"));
    assert!(out.contains("-    Default: dev"));
    assert!(out.contains("+    Default: test"));
}

#[test]
fn test_files_changed_without_exit_code_succeeds() {
    let temp_dir = setup(TEMPLATE_YAML);
    fs::write(temp_dir.path().join("other.yml"), "Resources: {}\n").unwrap();

    let output = cfndiff(temp_dir.path(), &["files", "template.yml", "other.yml"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Changes detected"));
}

#[test]
fn test_files_ignore_description() {
    let temp_dir = setup(TEMPLATE_YAML);
    fs::write(
        temp_dir.path().join("described.yml"),
        TEMPLATE_YAML.replace("Description: web stack", "Description: renamed"),
    )
    .unwrap();

    let strict = cfndiff(
        temp_dir.path(),
        &["files", "template.yml", "described.yml", "--exit-code"],
    );
    let relaxed = cfndiff(
        temp_dir.path(),
        &[
            "files",
            "template.yml",
            "described.yml",
            "--ignore-description",
            "--exit-code",
        ],
    );

    assert_eq!(strict.status.code(), Some(1));
    assert_eq!(relaxed.status.code(), Some(0));
}

#[test]
fn test_unparsable_input_is_fatal() {
    let temp_dir = setup(TEMPLATE_YAML);
    fs::write(temp_dir.path().join("broken.yml"), "Resources: {Bucket: [").unwrap();

    let output = cfndiff(temp_dir.path(), &["files", "template.yml", "broken.yml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("ERR_PARSE"), "stderr: {}", err);
    assert!(err.contains("broken.yml"));
}

#[test]
fn test_missing_local_file_is_fatal() {
    let temp_dir = setup(TEMPLATE_YAML);

    let output = cfndiff(temp_dir.path(), &["files", "template.yml", "nope.yml"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ERR_IO"));
}

#[test]
fn test_stack_template_json_output() {
    let temp_dir = setup(TEMPLATE_YAML);

    let output = cfndiff(
        temp_dir.path(),
        &[
            "stack",
            "web",
            "--template",
            "template.json",
            "--snapshot-dir",
            "snapshots",
            "--format",
            "json",
            "--output",
            "json",
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["changed"], false);
    assert_eq!(result["format"], "json");
    assert_eq!(
        result["diff"]["before"]["Resources"]["Bucket"]["Properties"]["BucketName"]["Ref"],
        "Env"
    );
    assert_eq!(
        result["identity"]["before_digest"],
        result["identity"]["after_digest"]
    );
}

#[test]
fn test_stack_unknown_snapshot_reports_everything_changed() {
    let temp_dir = setup(TEMPLATE_YAML);

    let output = cfndiff(
        temp_dir.path(),
        &[
            "stack",
            "missing-stack",
            "--template",
            "template.yml",
            "--snapshot-dir",
            "snapshots",
            "--exit-code",
        ],
    );

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("-{}"));
}

#[test]
fn test_stack_parameters_override_and_hidden() {
    let temp_dir = setup(TEMPLATE_YAML);
    let base = [
        "stack",
        "web",
        "--template",
        "template.yml",
        "--snapshot-dir",
        "snapshots",
        "--mode",
        "parameters",
        "--exit-code",
    ];

    let defaults_only = cfndiff(temp_dir.path(), &base);
    assert_eq!(defaults_only.status.code(), Some(1));

    let mut overridden = base.to_vec();
    overridden.extend(["--parameter", "Env=prod", "--ignore-hidden-params"]);
    let output = cfndiff(temp_dir.path(), &overridden);

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    assert!(!stdout(&output).contains("****"));
}

#[test]
fn test_stack_tags_file_with_flag_override() {
    let temp_dir = setup(TEMPLATE_YAML);
    fs::write(
        temp_dir.path().join("tags.yml"),
        "team: platform\ncost-center: 42\n",
    )
    .unwrap();

    let output = cfndiff(
        temp_dir.path(),
        &[
            "stack",
            "web",
            "--template",
            "template.yml",
            "--snapshot-dir",
            "snapshots",
            "--mode",
            "tags",
            "--tags-file",
            "tags.yml",
            "--tag",
            "team=core",
            "--exit-code",
        ],
    );

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
}

#[test]
fn test_malformed_key_value_flag_rejected() {
    let temp_dir = setup(TEMPLATE_YAML);

    let output = cfndiff(
        temp_dir.path(),
        &[
            "stack",
            "web",
            "--template",
            "template.yml",
            "--snapshot-dir",
            "snapshots",
            "--tag",
            "no-equals-sign",
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("KEY=VALUE"));
}
