use super::OutputFormat;
use std::path::PathBuf;

/// WalkRequest - Request DTO for the print-dependencies use case
///
/// Built by the CLI after merging command-line flags with the config file.
#[derive(Debug, Clone)]
pub struct WalkRequest {
    /// Root binaries, in command-line order
    pub roots: Vec<PathBuf>,
    /// Selected output layout
    pub format: OutputFormat,
    /// Whether text output includes version info
    pub verbose: bool,
}

impl WalkRequest {
    pub fn new(roots: Vec<PathBuf>, format: OutputFormat, verbose: bool) -> Self {
        Self {
            roots,
            format,
            verbose,
        }
    }
}
