use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use totool::config::CliOverrides;
use totool::shared::error::ExitCode;

/// Single-dash long flags accepted for compatibility with the historical
/// `totool -dot` syntax, mapped to their clap spelling.
const LEGACY_FLAGS: [(&str, &str); 1] = [("-dot", "--dot")];

/// Print the direct and transitive dynamic library dependencies of binaries
#[derive(Parser, Debug)]
#[command(name = "totool")]
#[command(version)]
#[command(
    about = "Print the direct and transitive dynamic library dependencies of binaries",
    long_about = None
)]
pub struct Args {
    /// Output extra info (compatibility and current versions)
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate dot output (also accepted as -dot)
    #[arg(long)]
    pub dot: bool,

    /// Inspection utility invoked as `<PROGRAM> -L <file>` (defaults to otool)
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Path to a config file (defaults to ./totool.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Binaries to print the dependency graph of
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Parses the process arguments, exiting on `--help`, `--version` or
    /// malformed arguments
    pub fn parse_args() -> Self {
        match Self::try_parse_from(normalize_legacy_flags(std::env::args_os())) {
            Ok(args) => args,
            Err(e) => {
                let _ = e.print();
                process::exit(exit_code_for(&e).as_i32());
            }
        }
    }

    /// Usage line printed when no file is given
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            tool: self.tool.clone(),
            dot: self.dot,
            verbose: self.verbose,
        }
    }
}

/// Exit code for a clap parse outcome: `--help`/`--version` succeed,
/// anything printed to stderr is an argument error.
fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

/// Rewrites legacy single-dash flags up to the first `--` separator.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                return arg;
            }
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg == *legacy)
                .map(|(_, modern)| OsString::from(modern))
                .unwrap_or(arg)
        })
        .collect()
}
