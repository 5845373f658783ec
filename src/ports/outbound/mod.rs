/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, stdout, stderr).
pub mod dependency_prober;
pub mod diagnostic_reporter;
pub mod graph_renderer;

pub use dependency_prober::DependencyProber;
pub use diagnostic_reporter::DiagnosticReporter;
pub use graph_renderer::GraphRenderer;
