//! Stack command
//!
//! Usage: cfndiff stack <STACK> --template <FILE> --snapshot-dir <DIR> [--mode <MODE>]

use super::output::{emit, load_set, parse_key_value, read_text, CompareArgs, ModeArg, OutputArgs};
use cfndiff_core::{run_diff, DiffOptions, DiffRequest, ExError, SnapshotGateway};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StackArgs {
    /// Stack name
    pub stack: String,

    /// Local template, JSON or YAML
    #[arg(long)]
    pub template: PathBuf,

    /// Directory of saved `<stack>.describe.json` / `<stack>.template.json` responses
    #[arg(long)]
    pub snapshot_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = ModeArg::Template)]
    pub mode: ModeArg,

    #[command(flatten)]
    pub compare: CompareArgs,

    /// Leave NoEcho parameters out of a parameters comparison
    #[arg(long)]
    pub ignore_hidden_params: bool,

    /// Mapping of parameter overrides, JSON or YAML
    #[arg(long)]
    pub parameters_file: Option<PathBuf>,

    #[arg(long = "parameter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub parameters: Vec<(String, String)>,

    /// Mapping of local tags, JSON or YAML
    #[arg(long)]
    pub tags_file: Option<PathBuf>,

    #[arg(long = "tag", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute stack command
pub fn execute(args: StackArgs) -> Result<i32, ExError> {
    let request = DiffRequest {
        stack_name: args.stack,
        template_input: args.template.display().to_string(),
        template_text: read_text(&args.template)?,
        parameters: load_set(args.parameters_file.as_deref(), &args.parameters)?,
        tags: load_set(args.tags_file.as_deref(), &args.tags)?,
        options: DiffOptions {
            format: args.compare.format.into(),
            mode: args.mode.into(),
            ignore_description: args.compare.ignore_description,
            ignore_hidden_params: args.ignore_hidden_params,
        },
    };
    tracing::debug!(
        stack_name = %request.stack_name,
        snapshot_dir = %args.snapshot_dir.display(),
        "local inputs loaded"
    );

    let gateway = SnapshotGateway::new(args.snapshot_dir);
    let result = run_diff(&gateway, &request)?;
    emit(&result, &args.output)
}
