use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Progress and detail lines are only printed in verbose mode; errors and
/// warnings are always printed. Nothing is ever written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }

    fn report_detail(&self, label: &str, value: &str) {
        if self.verbose {
            eprintln!("  {}: {}", label, value);
        }
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        if self.verbose {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}
