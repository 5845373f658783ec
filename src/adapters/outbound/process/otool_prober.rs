use crate::dependency_walk::domain::Dependency;
use crate::dependency_walk::services::OtoolOutputParser;
use crate::ports::outbound::DependencyProber;
use crate::shared::error::TotoolError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// Inspection utility used when nothing else is configured
pub const DEFAULT_TOOL: &str = "otool";

/// OtoolProber adapter running `<tool> -L <binary>` as a subprocess
///
/// The call blocks until the utility exits. Its stdout is handed to
/// `OtoolOutputParser`; on a non-zero exit its stderr is carried in the
/// returned `TotoolError::Probe`.
pub struct OtoolProber {
    tool: String,
}

impl OtoolProber {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    #[cfg(test)]
    fn tool(&self) -> &str {
        &self.tool
    }
}

impl Default for OtoolProber {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl DependencyProber for OtoolProber {
    fn probe(&self, binary: &Path) -> Result<Vec<Dependency>> {
        let output = Command::new(&self.tool)
            .arg("-L")
            .arg(binary)
            .output()
            .map_err(|e| TotoolError::ToolLaunch {
                tool: self.tool.clone(),
                binary: binary.to_path_buf(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(TotoolError::Probe {
                tool: self.tool.clone(),
                binary: binary.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(OtoolOutputParser::parse(&self.tool, binary, &stdout)?)
    }
}
