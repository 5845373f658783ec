/// Mock implementations for testing
mod mock_dependency_prober;
mod mock_diagnostic_reporter;

pub use mock_dependency_prober::MockDependencyProber;
pub use mock_diagnostic_reporter::MockDiagnosticReporter;
