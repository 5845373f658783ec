use crate::dependency_walk::domain::Dependency;
use std::io;
use std::path::Path;

/// GraphRenderer port receiving traversal events from the graph walk
///
/// Events arrive in traversal order and each one is written straight to
/// the output sink, so implementations keep no per-node state.
pub trait GraphRenderer {
    /// Called once before the walk of a root starts
    fn on_begin(&mut self) -> io::Result<()>;

    /// Called when the walk visits the root binary
    fn on_root(&mut self, path: &Path) -> io::Result<()>;

    /// Called when the walk visits a dependency for the first time
    fn on_dependency_node(&mut self, dependency: &Dependency) -> io::Result<()>;

    /// Called for each direct dependency edge `from -> to`, whether or not
    /// `to` has been visited already
    fn on_edge(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Called once after the walk of a root ends, successful or not
    fn on_end(&mut self) -> io::Result<()>;
}
