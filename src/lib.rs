//! totool - transitive otool
//!
//! Walks the dynamic library dependency graph of compiled binaries by
//! repeatedly running `otool -L` and prints the result either as an
//! indented listing or as a Graphviz digraph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Core** (`dependency_walk`): dependency records, the breadth-first
//!   graph walk and the `otool -L` output parser
//! - **Application Layer** (`application`): the print-dependencies use case,
//!   DTOs and the renderer factory
//! - **Ports** (`ports`): interfaces to the prober, renderers and diagnostics
//! - **Adapters** (`adapters`): subprocess prober, text/dot renderers, stderr reporter
//! - **Shared** (`shared`): error types, result alias and path helpers
//!
//! # Example
//!
//! ```no_run
//! use totool::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = PrintDependenciesUseCase::new(OtoolProber::default(), StderrReporter::new());
//!
//! let request = WalkRequest::new(
//!     vec![PathBuf::from("/usr/bin/ssh")],
//!     OutputFormat::Dot,
//!     false,
//! );
//! let summary = use_case.execute(&request, std::io::stdout())?;
//! eprintln!("{} node(s), {} edge(s)", summary.nodes, summary.edges);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_walk;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrReporter;
    pub use crate::adapters::outbound::process::OtoolProber;
    pub use crate::adapters::outbound::renderers::{DotRenderer, TextRenderer};
    pub use crate::application::dto::{OutputFormat, WalkRequest, WalkSummary};
    pub use crate::application::factories::RendererFactory;
    pub use crate::application::use_cases::PrintDependenciesUseCase;
    pub use crate::dependency_walk::domain::{Dependency, WalkStats};
    pub use crate::dependency_walk::services::{GraphWalker, OtoolOutputParser};
    pub use crate::ports::outbound::{DependencyProber, DiagnosticReporter, GraphRenderer};
    pub use crate::shared::error::{ExitCode, TotoolError};
    pub use crate::shared::Result;
}
