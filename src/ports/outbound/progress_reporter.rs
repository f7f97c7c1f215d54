/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (stderr) so it never mixes with the
/// SBOM written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an indented detail line belonging to the previous message
    fn report_detail(&self, label: &str, value: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
