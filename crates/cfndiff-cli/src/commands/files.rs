//! Files command
//!
//! Usage: cfndiff files <BEFORE> <AFTER>

use super::output::{emit, read_text, CompareArgs, OutputArgs};
use cfndiff_core::{compare_texts, DiffOptions, ExError};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FilesArgs {
    /// Template treated as the deployed side
    pub before: PathBuf,

    /// Template treated as the local side
    pub after: PathBuf,

    #[command(flatten)]
    pub compare: CompareArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute files command
pub fn execute(args: FilesArgs) -> Result<i32, ExError> {
    let before_input = args.before.display().to_string();
    let after_input = args.after.display().to_string();
    let before_text = read_text(&args.before)?;
    let after_text = read_text(&args.after)?;

    let options = DiffOptions {
        format: args.compare.format.into(),
        ignore_description: args.compare.ignore_description,
        ..DiffOptions::default()
    };
    let result = compare_texts(
        (&before_input, &before_text),
        (&after_input, &after_text),
        &options,
    )?;
    emit(&result, &args.output)
}
