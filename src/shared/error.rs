use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Per-root failures (unresolvable paths, failing probes) never change
/// the exit code; only usage problems and run-terminating errors do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All roots were processed (individual roots may still have failed)
    Success = 0,
    /// No binary path was given on the command line
    UsageError = 1,
    /// Invalid command-line arguments, as rejected by clap
    InvalidArguments = 2,
    /// Run-terminating error (unexpected utility output, bad config, output failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UsageError => write!(f, "Usage Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while walking a dependency graph.
///
/// Uses thiserror to derive Display and Error. All variants except
/// `UnexpectedOutput` and `Output` are scoped to the root being walked.
#[derive(Debug, Error)]
pub enum TotoolError {
    #[error("cannot get {path:?} absolute path: {details}")]
    PathResolution { path: PathBuf, details: String },

    #[error("failed to run {tool} on {binary}: {details}\n\n💡 Hint: Check that {tool} is installed and on PATH, or set `tool` in the config file")]
    ToolLaunch {
        tool: String,
        binary: PathBuf,
        details: String,
    },

    #[error("{tool} error when processing {binary}\n{stderr}")]
    Probe {
        tool: String,
        binary: PathBuf,
        stderr: String,
    },

    #[error("unexpected {tool} output for {binary}: {line:?}\n\n💡 Hint: The output format of {tool} is not supported by this version of totool")]
    UnexpectedOutput {
        tool: String,
        binary: PathBuf,
        line: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl TotoolError {
    /// Whether the error must stop the whole run rather than just the current root.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TotoolError::UnexpectedOutput { .. } | TotoolError::Output(_)
        )
    }
}
