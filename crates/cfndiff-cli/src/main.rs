//! cfndiff CLI
//!
//! Compares a deployed stack (or a saved template) with a local definition.
//! Exit status: 0 success, 1 changes detected (with `--exit-code`), 2 error.

use cfndiff_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cfndiff")]
#[command(about = "cfndiff - Format-independent stack template diff", long_about = None)]
struct Cli {
    /// Log line format on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare a stack snapshot with a local template, parameters or tags
    Stack(commands::stack::StackArgs),
    /// Compare two local template files
    Files(commands::files::FilesArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let result = match cli.command {
        Commands::Stack(args) => commands::stack::execute(args),
        Commands::Files(args) => commands::files::execute(args),
    };

    match result {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
