//! Progress notification port
//!
//! Defines the interface for reporting progress during a dispatch.

use hwhelper_domain::{Attempt, Endpoint, Topic};

/// Callback for progress updates during a dispatch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, logs, etc.)
pub trait DispatchProgress: Send + Sync {
    /// Called once before the first attempt
    fn on_dispatch_start(&self, topic: &Topic, total_endpoints: usize);

    /// Called when an attempt is about to be sent
    fn on_attempt_start(&self, index: usize, endpoint: &Endpoint);

    /// Called when an attempt has been classified
    fn on_attempt_complete(&self, index: usize, attempt: &Attempt);

    /// Called when the dispatch ends, whatever the outcome
    fn on_dispatch_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DispatchProgress for NoProgress {
    fn on_dispatch_start(&self, _topic: &Topic, _total_endpoints: usize) {}
    fn on_attempt_start(&self, _index: usize, _endpoint: &Endpoint) {}
    fn on_attempt_complete(&self, _index: usize, _attempt: &Attempt) {}
}
