use crate::dependency_walk::domain::Dependency;
use crate::shared::error::TotoolError;
use crate::shared::path;
use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches one dependency line of `otool -L` output:
/// `	/usr/lib/libobjc.A.dylib (compatibility version 1.0.0, current version 228.0.0, upward)`
///
/// The optional trailing `:` also admits the per-architecture headers of a
/// universal binary, `/usr/bin/ssh (architecture arm64e):`, which name the
/// binary itself and are dropped as self entries.
static DEPENDENCY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.*\S)\s+(\(.*\)):?\s*$").expect("dependency line pattern is valid")
});

/// Markers standing for the directory of the binary that references the library.
const RELATIVE_MARKERS: [&str; 2] = ["@executable_path/", "@loader_path/"];

/// OtoolOutputParser turns the text printed by `otool -L <binary>` into
/// dependency records.
///
/// This is pure parsing with no I/O; the process adapter feeds it the
/// captured stdout.
pub struct OtoolOutputParser;

impl OtoolOutputParser {
    /// Parses the output produced for `binary`
    ///
    /// The first line restates the binary and is skipped. Every other line
    /// must look like `<path> (<info>)`. Relative markers are resolved against
    /// the directory of `binary`, and an entry that resolves to `binary`
    /// itself is dropped.
    ///
    /// # Errors
    /// Returns `TotoolError::UnexpectedOutput` for the first line that does
    /// not have the expected shape.
    pub fn parse(
        tool: &str,
        binary: &Path,
        output: &str,
    ) -> Result<Vec<Dependency>, TotoolError> {
        let mut dependencies = Vec::new();

        for line in output.lines().skip(1) {
            let captures =
                DEPENDENCY_LINE
                    .captures(line)
                    .ok_or_else(|| TotoolError::UnexpectedOutput {
                        tool: tool.to_string(),
                        binary: binary.to_path_buf(),
                        line: line.to_string(),
                    })?;

            let resolved = Self::resolve_dependency_path(binary, &captures[1]);
            if resolved == binary {
                // otool restates a dylib as its own first entry to show its install name
                continue;
            }
            dependencies.push(Dependency::new(resolved, captures[2].to_string()));
        }

        Ok(dependencies)
    }

    /// Rewrites a reported dependency path into one that can be probed again.
    ///
    /// Paths starting with `@executable_path/` or `@loader_path/` get the
    /// marker replaced by the directory of `binary` and are cleaned. Anything
    /// else, `@rpath/` included, is returned as reported.
    pub fn resolve_dependency_path(binary: &Path, reported: &str) -> PathBuf {
        for marker in RELATIVE_MARKERS {
            if let Some(rest) = reported.strip_prefix(marker) {
                let dir = binary.parent().unwrap_or_else(|| Path::new("/"));
                let mut joined = OsString::from(dir.as_os_str());
                joined.push("/");
                joined.push(rest);
                return path::clean(Path::new(&joined));
            }
        }
        PathBuf::from(reported)
    }
}
