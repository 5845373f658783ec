use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use totool::prelude::*;

/// Mock DependencyProber serving an in-memory dependency graph
pub struct MockDependencyProber {
    pub graph: HashMap<PathBuf, Vec<Dependency>>,
    pub failing: HashSet<PathBuf>,
    pub garbled: HashSet<PathBuf>,
}

impl MockDependencyProber {
    pub fn new() -> Self {
        Self {
            graph: HashMap::new(),
            failing: HashSet::new(),
            garbled: HashSet::new(),
        }
    }

    /// Declares the direct dependencies of `binary`, all with the same info text
    pub fn with_dependencies(mut self, binary: &str, dependencies: &[&str]) -> Self {
        let deps = dependencies
            .iter()
            .map(|d| {
                Dependency::new(
                    PathBuf::from(d),
                    "(compatibility version 1.0.0, current version 1.0.0)".to_string(),
                )
            })
            .collect();
        self.graph.insert(PathBuf::from(binary), deps);
        self
    }

    /// Makes probing `binary` fail as if the utility exited non-zero
    pub fn with_failure(mut self, binary: &str) -> Self {
        self.failing.insert(PathBuf::from(binary));
        self
    }

    /// Makes probing `binary` fail as if the utility printed an unparsable line
    pub fn with_unexpected_output(mut self, binary: &str) -> Self {
        self.garbled.insert(PathBuf::from(binary));
        self
    }
}

impl Default for MockDependencyProber {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyProber for MockDependencyProber {
    fn probe(&self, binary: &Path) -> Result<Vec<Dependency>> {
        if self.failing.contains(binary) {
            return Err(TotoolError::Probe {
                tool: "otool".to_string(),
                binary: binary.to_path_buf(),
                stderr: format!("error: can't open file: {}", binary.display()),
            }
            .into());
        }
        if self.garbled.contains(binary) {
            return Err(TotoolError::UnexpectedOutput {
                tool: "otool".to_string(),
                binary: binary.to_path_buf(),
                line: "Archive : garbled".to_string(),
            }
            .into());
        }
        Ok(self.graph.get(binary).cloned().unwrap_or_default())
    }
}
