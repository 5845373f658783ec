use crate::dependency_walk::domain::Dependency;
use crate::shared::Result;
use std::path::Path;

/// DependencyProber port for listing the direct dependencies of a binary
///
/// This port abstracts the external inspection utility (e.g. `otool -L`)
/// so the graph walk can be tested against an in-memory graph.
pub trait DependencyProber {
    /// Lists the direct link dependencies of `binary`
    ///
    /// # Arguments
    /// * `binary` - Path of the binary to inspect
    ///
    /// # Returns
    /// The dependencies in the order the utility reported them, with
    /// relative markers resolved and the self entry removed
    ///
    /// # Errors
    /// Returns a `TotoolError` wrapped in `anyhow::Error` if:
    /// - The utility cannot be launched or exits non-zero (`ToolLaunch`, `Probe`)
    /// - The utility prints a line that cannot be parsed (`UnexpectedOutput`)
    fn probe(&self, binary: &Path) -> Result<Vec<Dependency>>;
}
