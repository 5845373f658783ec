/// DiagnosticReporter port for reporting problems to the user
///
/// Diagnostics go to a separate channel (stderr) so they never interleave
/// with the rendered graph on stdout.
pub trait DiagnosticReporter {
    /// Reports a non-fatal warning, e.g. an ignored config field
    fn report_warning(&self, message: &str);

    /// Reports an error that stopped the walk of one root binary
    ///
    /// # Arguments
    /// * `root` - The root argument as given on the command line
    /// * `message` - The error description
    fn report_root_error(&self, root: &str, message: &str);
}
