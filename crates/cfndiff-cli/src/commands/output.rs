//! Arguments and helpers shared by the subcommands

use cfndiff_core::diff::render_human_summary;
use cfndiff_core::document::parse;
use cfndiff_core::params::set_from_document;
use cfndiff_core::{CfnDiffError, DiffMode, DiffResult, ExError, Format, ParameterSet};
use clap::{Args, ValueEnum};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Template,
    Parameters,
    Tags,
}

impl From<ModeArg> for DiffMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Template => DiffMode::Template,
            ModeArg::Parameters => DiffMode::Parameters,
            ModeArg::Tags => DiffMode::Tags,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Status line plus unified diff
    Text,
    /// Serialized diff result
    Json,
}

/// Options common to every comparison
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Format of the canonical before/after payload
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// Drop the top-level Description from both sides
    #[arg(long)]
    pub ignore_description: bool,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(long = "output", value_enum, default_value_t = OutputKind::Text)]
    pub kind: OutputKind,

    /// Exit with status 1 when changes are detected
    #[arg(long)]
    pub exit_code: bool,
}

/// clap value parser for `KEY=VALUE`
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

pub fn read_text(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(CfnDiffError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Entries from an optional mapping file, then `flags` on top.
pub fn load_set(file: Option<&Path>, flags: &[(String, String)]) -> Result<ParameterSet, ExError> {
    let mut set = match file {
        Some(path) => {
            let input = path.display().to_string();
            let (doc, _) = parse(&input, &read_text(path)?)?;
            set_from_document(&input, &doc)?
        }
        None => ParameterSet::new(),
    };
    set.extend(flags.iter().cloned());
    Ok(set)
}

/// Print `result` to stdout and pick the exit status.
pub fn emit(result: &DiffResult, args: &OutputArgs) -> Result<i32, ExError> {
    match args.kind {
        OutputKind::Text => print!("{}", render_human_summary(result)),
        OutputKind::Json => {
            let json = serde_json::to_string_pretty(result).map_err(CfnDiffError::from)?;
            println!("{}", json);
        }
    }
    Ok(if args.exit_code && result.changed { 1 } else { 0 })
}
