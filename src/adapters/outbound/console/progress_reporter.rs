use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Uses an indicatif spinner while the crawl is running, since the number
/// of crates to expand is not known up front.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> Option<ProgressBar> {
        let mut slot = self.spinner.lock().ok()?;
        if let Some(spinner) = slot.as_ref() {
            return Some(spinner.clone());
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(120));
        *slot = Some(spinner.clone());
        Some(spinner)
    }

    fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
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
        eprintln!("{}", message);
    }

    fn report_step(&self, completed: usize, current: &str) {
        if let Some(spinner) = self.get_or_create_spinner() {
            spinner.set_message(format!("[{}] expanding {}", completed, current));
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }
}

/// QuietProgressReporter adapter that discards everything (`--quiet`)
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietProgressReporter;

impl ProgressReporter for QuietProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_step(&self, _completed: usize, _current: &str) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
