//! Module driver.
//!
//! Assembles the two documents for the requested [`DiffMode`] and hands them
//! to the comparator:
//!
//! | mode | before (remote) | after (local) |
//! |---|---|---|
//! | template | deployed template body | local template |
//! | parameters | stack parameters | template defaults merged with overrides |
//! | tags | stack tags | supplied tags |

use crate::diff::{compare, compare_templates, strip_description, DiffMode, DiffOptions, DiffResult};
use crate::document::{parse, Document};
use crate::errors::ExError;
use crate::gateway::StackDataGateway;
use crate::params::{
    extract_defaults, extract_sensitive_names, merge, redact, to_document, ParameterSet,
};
use crate::{log_op_end, log_op_error, log_op_start};
use cfndiff_core_types::schema::{
    FIELD_CHANGED, FIELD_FORMAT, FIELD_MODE, FIELD_PARAM_COUNT, FIELD_REDACTED_COUNT, FIELD_RUN_ID,
    FIELD_STACK_NAME,
};
use cfndiff_core_types::sensitive::is_mask;
use cfndiff_core_types::RunId;
use std::time::Instant;

/// Everything the local side contributes to one stack comparison.
#[derive(Debug, Clone, Default)]
pub struct DiffRequest {
    pub stack_name: String,
    /// Names the local template in errors (usually its path)
    pub template_input: String,
    /// Local template, JSON or YAML
    pub template_text: String,
    /// Explicit parameter overrides
    pub parameters: ParameterSet,
    pub tags: ParameterSet,
    pub options: DiffOptions,
}

/// Compare a deployed stack with its local definition.
///
/// # Errors
///
/// `Parse` when the local template is neither JSON nor YAML. Remote
/// failures never error; they compare as empty.
pub fn run_diff<G>(gateway: &G, request: &DiffRequest) -> Result<DiffResult, ExError>
where
    G: StackDataGateway + ?Sized,
{
    let run_id = RunId::new();
    let start = Instant::now();
    let options = &request.options;
    log_op_start!(
        "run_diff",
        { FIELD_RUN_ID } = %run_id,
        { FIELD_STACK_NAME } = %request.stack_name,
        { FIELD_MODE } = %options.mode,
        { FIELD_FORMAT } = %options.format
    );

    let outcome = assemble(gateway, request).and_then(|(before, after)| match options.mode {
        DiffMode::Template => compare_templates(&before, &after, options.format),
        DiffMode::Parameters | DiffMode::Tags => compare(&before, &after, options.format),
    });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(result) => {
            log_op_end!(
                "run_diff",
                duration_ms = duration_ms,
                { FIELD_RUN_ID } = %run_id,
                { FIELD_CHANGED } = result.changed
            );
        }
        Err(err) => {
            log_op_error!(
                "run_diff",
                err.clone(),
                duration_ms = duration_ms,
                { FIELD_RUN_ID } = %run_id
            );
        }
    }
    outcome
}

/// Compare two local documents (e.g. a saved remote template and a working
/// copy). Only `format` and `ignore_description` apply.
///
/// # Errors
///
/// `Parse` naming whichever input is neither JSON nor YAML.
pub fn compare_texts(
    before: (&str, &str),
    after: (&str, &str),
    options: &DiffOptions,
) -> Result<DiffResult, ExError> {
    let start = Instant::now();
    log_op_start!("compare_texts", before = before.0, after = after.0);

    let outcome = parse_and_compare(before, after, options);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(result) => {
            log_op_end!(
                "compare_texts",
                duration_ms = duration_ms,
                { FIELD_CHANGED } = result.changed
            );
        }
        Err(err) => {
            log_op_error!("compare_texts", err.clone(), duration_ms = duration_ms);
        }
    }
    outcome
}

fn parse_and_compare(
    before: (&str, &str),
    after: (&str, &str),
    options: &DiffOptions,
) -> Result<DiffResult, ExError> {
    let (mut before_doc, _) = parse(before.0, before.1)?;
    let (mut after_doc, _) = parse(after.0, after.1)?;
    if options.ignore_description {
        strip_description(&mut before_doc);
        strip_description(&mut after_doc);
    }
    compare_templates(&before_doc, &after_doc, options.format)
}

fn assemble<G>(gateway: &G, request: &DiffRequest) -> Result<(Document, Document), ExError>
where
    G: StackDataGateway + ?Sized,
{
    let options = &request.options;
    match options.mode {
        DiffMode::Template => {
            let mut remote = gateway.template_body(&request.stack_name);
            let mut local = parse_local(request)?;
            if options.ignore_description {
                strip_description(&mut remote);
                strip_description(&mut local);
            }
            Ok((remote, local))
        }
        DiffMode::Parameters => {
            let template = parse_local(request)?;
            let declarations = template.get("Parameters").cloned().unwrap_or(Document::Null);

            let mut local = merge(&extract_defaults(&declarations), &request.parameters);
            let mut remote = gateway.describe_stack(&request.stack_name).parameters;

            let stack_name = request.stack_name.as_str();
            if options.ignore_hidden_params {
                let hidden = extract_sensitive_names(&declarations);
                remote = redact(&remote, &hidden);
                local = redact(&local, &hidden);
                tracing::debug!(
                    { FIELD_STACK_NAME } = stack_name,
                    { FIELD_REDACTED_COUNT } = hidden.len(),
                    "dropped no-echo parameters"
                );
            } else {
                let masked = remote.values().filter(|value| is_mask(value)).count();
                if masked > 0 {
                    tracing::info!(
                        { FIELD_STACK_NAME } = stack_name,
                        masked,
                        "remote reports masked no-echo values; they differ unless hidden params are ignored"
                    );
                }
            }
            tracing::debug!(
                { FIELD_STACK_NAME } = stack_name,
                { FIELD_PARAM_COUNT } = local.len(),
                "resolved local parameters"
            );
            Ok((to_document(&remote), to_document(&local)))
        }
        DiffMode::Tags => {
            let remote = gateway.describe_stack(&request.stack_name).tags;
            Ok((to_document(&remote), to_document(&request.tags)))
        }
    }
}

fn parse_local(request: &DiffRequest) -> Result<Document, ExError> {
    parse(&request.template_input, &request.template_text)
        .map(|(doc, _)| doc)
        .map_err(ExError::from)
}
