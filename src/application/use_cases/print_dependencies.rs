use crate::application::dto::{WalkRequest, WalkSummary};
use crate::application::factories::RendererFactory;
use crate::dependency_walk::services::GraphWalker;
use crate::ports::outbound::{DependencyProber, DiagnosticReporter};
use crate::shared::error::TotoolError;
use crate::shared::Result;
use std::io::Write;

/// PrintDependenciesUseCase - prints the dependency graph of each root binary
///
/// Roots are walked one after another, each with its own visited set.
/// A root that fails with a recoverable error is reported and skipped;
/// a fatal error (unexpected utility output, broken output stream) ends
/// the run.
///
/// # Type Parameters
/// * `P` - DependencyProber implementation
/// * `R` - DiagnosticReporter implementation
pub struct PrintDependenciesUseCase<P, R> {
    prober: P,
    reporter: R,
}

impl<P, R> PrintDependenciesUseCase<P, R>
where
    P: DependencyProber,
    R: DiagnosticReporter,
{
    /// Creates a new PrintDependenciesUseCase with injected dependencies
    pub fn new(prober: P, reporter: R) -> Self {
        Self { prober, reporter }
    }

    /// Executes the use case, rendering into `out`
    ///
    /// # Returns
    /// Counts of rendered roots, nodes and edges
    ///
    /// # Errors
    /// Returns the first fatal `TotoolError`, with the root it occurred on
    /// as context. Recoverable errors are only reported.
    pub fn execute<W: Write>(&self, request: &WalkRequest, out: W) -> Result<WalkSummary> {
        let mut renderer = RendererFactory::create(request.format, request.verbose, out);
        let walker = GraphWalker::new(&self.prober);
        let mut summary = WalkSummary::default();

        for root in &request.roots {
            match walker.walk(root, renderer.as_mut()) {
                Ok(stats) => {
                    summary.succeeded += 1;
                    summary.nodes += stats.nodes;
                    summary.edges += stats.edges;
                }
                Err(err) if Self::is_fatal(&err) => {
                    return Err(err.context(root.display().to_string()));
                }
                Err(err) => {
                    self.reporter
                        .report_root_error(&root.display().to_string(), &err.to_string());
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }

    fn is_fatal(err: &anyhow::Error) -> bool {
        err.downcast_ref::<TotoolError>()
            .is_some_and(TotoolError::is_fatal)
    }
}
