/// WalkSummary - Response DTO for the print-dependencies use case
///
/// Failed roots were already reported through the DiagnosticReporter;
/// the summary only counts them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Roots whose graph was rendered completely
    pub succeeded: usize,
    /// Roots that were skipped or cut short by a recoverable error
    pub failed: usize,
    /// Nodes rendered across all roots
    pub nodes: usize,
    /// Edges rendered across all roots
    pub edges: usize,
}

impl WalkSummary {
    pub fn total_roots(&self) -> usize {
        self.succeeded + self.failed
    }
}
