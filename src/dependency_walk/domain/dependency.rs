use std::path::{Path, PathBuf};

/// A single dynamic library referenced by a binary's link table
///
/// `info` holds the parenthesised version text reported by the inspection
/// utility, e.g. `(compatibility version 1.0.0, current version 228.0.0)`.
/// It is empty for the root binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    binary_path: PathBuf,
    info: String,
}

impl Dependency {
    pub fn new(binary_path: PathBuf, info: String) -> Self {
        Self { binary_path, info }
    }

    /// A dependency record for a root binary, which carries no info text.
    pub fn root(binary_path: PathBuf) -> Self {
        Self::new(binary_path, String::new())
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}
