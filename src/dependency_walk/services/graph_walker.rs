use crate::dependency_walk::domain::{Dependency, WalkStats};
use crate::ports::outbound::{DependencyProber, GraphRenderer};
use crate::shared::error::TotoolError;
use crate::shared::path;
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// GraphWalker service traversing the dependency graph of one root binary
///
/// The walk is breadth-first. Every node is probed once; nodes already
/// visited are skipped when they come off the queue, which makes cycles
/// and diamonds safe. Renderer events are emitted as the walk goes.
pub struct GraphWalker<'a, P: DependencyProber + ?Sized> {
    prober: &'a P,
}

impl<'a, P: DependencyProber + ?Sized> GraphWalker<'a, P> {
    pub fn new(prober: &'a P) -> Self {
        Self { prober }
    }

    /// Walks the dependency graph of `root`
    ///
    /// `root` is made absolute first. `on_begin`/`on_end` bracket the walk,
    /// and `on_end` is emitted even when probing fails halfway.
    ///
    /// # Returns
    /// Node and edge counts of the rendered graph
    ///
    /// # Errors
    /// Returns the first `TotoolError` met: path resolution, probe failure,
    /// unexpected utility output or an output write failure
    pub fn walk(&self, root: &Path, renderer: &mut dyn GraphRenderer) -> Result<WalkStats> {
        let root = path::absolutize(root).map_err(|e| TotoolError::PathResolution {
            path: root.to_path_buf(),
            details: e.to_string(),
        })?;

        renderer.on_begin().map_err(TotoolError::Output)?;
        let traversal = self.traverse(&root, renderer);
        let end = renderer.on_end().map_err(TotoolError::Output);

        let stats = traversal?;
        end?;
        Ok(stats)
    }

    fn traverse(&self, root: &Path, renderer: &mut dyn GraphRenderer) -> Result<WalkStats> {
        let mut stats = WalkStats::default();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut to_visit: VecDeque<Dependency> = VecDeque::new();
        to_visit.push_back(Dependency::root(root.to_path_buf()));

        while let Some(from) = to_visit.pop_front() {
            if !visited.insert(from.binary_path().to_path_buf()) {
                continue;
            }

            if from.binary_path() == root {
                renderer.on_root(root).map_err(TotoolError::Output)?;
            } else {
                renderer
                    .on_dependency_node(&from)
                    .map_err(TotoolError::Output)?;
            }
            stats.nodes += 1;

            let direct = self.prober.probe(from.binary_path())?;
            for to in &direct {
                renderer
                    .on_edge(from.binary_path(), to.binary_path())
                    .map_err(TotoolError::Output)?;
                stats.edges += 1;
            }
            to_visit.extend(direct);
        }

        Ok(stats)
    }
}
