use crate::ports::outbound::DiagnosticReporter;
use owo_colors::{OwoColorize, Stream};

/// Prefix of every diagnostic line
const PREFIX: &str = "totool:";

/// StderrReporter adapter for reporting diagnostics to stderr
///
/// This adapter implements the DiagnosticReporter port. Lines are
/// prefixed with `totool:` and colored only when stderr is a terminal
/// that supports it, so redirected output stays plain.
pub struct StderrReporter;

impl StderrReporter {
    pub fn new() -> Self {
        Self
    }

    fn format_root_error(root: &str, message: &str) -> String {
        format!("{} {}: {}", PREFIX, root, message)
    }

    fn format_warning(message: &str) -> String {
        format!("{} warning: {}", PREFIX, message)
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for StderrReporter {
    fn report_warning(&self, message: &str) {
        let line = Self::format_warning(message);
        eprintln!(
            "{}",
            line.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_root_error(&self, root: &str, message: &str) {
        let line = Self::format_root_error(root, message);
        eprintln!(
            "{}",
            line.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }
}
