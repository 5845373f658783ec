use crate::dependency_walk::domain::Dependency;
use crate::ports::outbound::GraphRenderer;
use std::io::{self, Write};
use std::path::Path;

/// TextRenderer adapter printing dependencies the way `otool -L` does
///
/// The root is printed as a `<path>:` header and every visited
/// dependency as a tab-indented line below it. Edges are not shown.
pub struct TextRenderer<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`; with `verbose` each dependency
    /// line is followed by its version info
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GraphRenderer for TextRenderer<W> {
    fn on_begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn on_root(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "{}:", path.display())
    }

    fn on_dependency_node(&mut self, dependency: &Dependency) -> io::Result<()> {
        if self.verbose {
            writeln!(
                self.out,
                "\t{} {}",
                dependency.binary_path().display(),
                dependency.info()
            )
        } else {
            writeln!(self.out, "\t{}", dependency.binary_path().display())
        }
    }

    fn on_edge(&mut self, _from: &Path, _to: &Path) -> io::Result<()> {
        Ok(())
    }

    fn on_end(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
