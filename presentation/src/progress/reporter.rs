//! Progress reporting for dispatch runs

use colored::Colorize;
use hwhelper_application::DispatchProgress;
use hwhelper_domain::{Attempt, Endpoint, Topic};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the attempt in flight and one line per finished attempt
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    total: Mutex<usize>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            total: Mutex::new(0),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchProgress for ProgressReporter {
    fn on_dispatch_start(&self, topic: &Topic, total_endpoints: usize) {
        if let Ok(mut total) = self.total.lock() {
            *total = total_endpoints;
        }
        eprintln!("{} {}", "->".cyan(), topic.combined_topic().bold());
    }

    fn on_attempt_start(&self, index: usize, endpoint: &Endpoint) {
        let total = self.total.lock().map(|t| *t).unwrap_or(0);
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("[{}/{}]", index + 1, total));
        pb.set_message(endpoint.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_attempt_complete(&self, _index: usize, attempt: &Attempt) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            let line = match attempt.failure_detail() {
                None => format!("{} {}", "v".green(), attempt.endpoint),
                Some(detail) => format!(
                    "{} {} {}",
                    "x".red(),
                    attempt.endpoint,
                    hwhelper_domain::truncate(detail, 120).dimmed()
                ),
            };
            pb.finish_with_message(line);
        }
    }

    fn on_dispatch_complete(&self, _success: bool) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DispatchProgress for SimpleProgress {
    fn on_dispatch_start(&self, topic: &Topic, total_endpoints: usize) {
        eprintln!(
            "{} {} ({} endpoints)",
            "->".cyan(),
            topic.combined_topic().bold(),
            total_endpoints
        );
    }

    fn on_attempt_start(&self, index: usize, endpoint: &Endpoint) {
        eprintln!("  Trying [{}]: {}", index + 1, endpoint);
    }

    fn on_attempt_complete(&self, _index: usize, attempt: &Attempt) {
        match attempt.failure_detail() {
            None => eprintln!("  {} {}", "v".green(), attempt.endpoint),
            Some(detail) => eprintln!("  {} {} ({})", "x".red(), attempt.endpoint, detail),
        }
    }
}
