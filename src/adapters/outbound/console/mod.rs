/// Console adapters writing diagnostics to the terminal
mod stderr_reporter;

pub use stderr_reporter::StderrReporter;
