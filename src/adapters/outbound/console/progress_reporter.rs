use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} - {msg}";

/// StderrProgressReporter adapter writing progress to stderr
///
/// Keeps stdout free for the report. Step progress is drawn with an
/// indicatif bar that is cleared before the next message. A quiet reporter
/// still prints errors and warnings.
pub struct StderrProgressReporter {
    quiet: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            quiet: false,
            progress_bar: RefCell::new(None),
        }
    }

    /// A reporter that only prints errors and warnings
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64).with_style(style);
        *slot = Some(pb.clone());
        pb
    }

    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Loading");
        reporter.report_progress(1, 2, Some("parsing index"));
        assert!(reporter.progress_bar.borrow().is_some());

        reporter.report_progress(2, 2, None);
        reporter.report_completion("Done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_quiet_reporter_draws_no_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_progress(1, 2, Some("parsing index"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_error("still printed");
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.quiet);
    }
}
