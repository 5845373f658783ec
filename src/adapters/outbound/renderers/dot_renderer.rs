use crate::dependency_walk::domain::Dependency;
use crate::ports::outbound::GraphRenderer;
use std::io::{self, Write};
use std::path::Path;

/// DotRenderer adapter emitting a Graphviz digraph
///
/// Nodes are implicit: only edges are written, between the
/// `digraph G {` header and the closing brace.
pub struct DotRenderer<W: Write> {
    out: W,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    /// Escapes a path for use inside a double-quoted dot ID
    fn quote(path: &Path) -> String {
        let raw = path.display().to_string();
        format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl<W: Write> GraphRenderer for DotRenderer<W> {
    fn on_begin(&mut self) -> io::Result<()> {
        writeln!(self.out, "digraph G {{")
    }

    fn on_root(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn on_dependency_node(&mut self, _dependency: &Dependency) -> io::Result<()> {
        Ok(())
    }

    fn on_edge(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        writeln!(self.out, "\t{} -> {};", Self::quote(from), Self::quote(to))
    }

    fn on_end(&mut self) -> io::Result<()> {
        writeln!(self.out, "}}")?;
        self.out.flush()
    }
}
