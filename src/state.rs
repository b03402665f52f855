//! Process-wide lifecycle state
//!
//! Replaces ambient globals with an explicit context object handed to the
//! dispatcher and every handler. The one-shot error latch is consumed via
//! an atomic check-and-clear, so a multi-threaded host cannot surface the
//! same failure twice.

use parking_lot::Mutex;

/// A recorded primary-engine failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    /// Human-readable failure summary; absent reports render as
    /// `"Unknown error."`
    pub message: Option<String>,

    /// Textual failure trace, when one was captured
    pub traceback: Option<String>,
}

impl ErrorReport {
    /// Report with a message and no traceback
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            traceback: None,
        }
    }

    /// Report with both a message and a traceback
    pub fn with_traceback(message: impl Into<String>, traceback: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            traceback: Some(traceback.into()),
        }
    }
}

#[derive(Debug, Default)]
struct StateInner {
    /// Did the primary engine initialize successfully
    loaded: bool,

    /// Primary engine unusable; requests go straight to degraded mode
    failed: bool,

    /// First failure recorded this lifecycle; later failures do not
    /// overwrite it
    report: Option<ErrorReport>,

    /// One-shot latch: the next lifecycle event surfaces the report once
    show_error: bool,
}

/// Lifecycle-scoped shared state
///
/// Initialized at load time, torn down at unload. The dispatcher clears
/// the latch; handlers read the report.
#[derive(Debug, Default)]
pub struct SharedState {
    inner: Mutex<StateInner>,
}

impl SharedState {
    /// Fresh state: not loaded, no failure, latch clear
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the primary engine as successfully initialized
    pub fn mark_loaded(&self) {
        self.inner.lock().loaded = true;
    }

    /// Record an initialization failure
    ///
    /// The engine is unusable afterwards; the first report sticks and the
    /// latch is armed.
    pub fn record_load_failure(&self, report: ErrorReport) {
        self.record(report, true);
    }

    /// Record a per-request failure
    ///
    /// The engine stays available for later requests; the first report
    /// sticks and the latch is armed.
    pub fn record_request_failure(&self, report: ErrorReport) {
        self.record(report, false);
    }

    fn record(&self, report: ErrorReport, fatal: bool) {
        let mut inner = self.inner.lock();
        if fatal {
            inner.failed = true;
        }
        if inner.report.is_none() {
            inner.report = Some(report);
            inner.show_error = true;
        }
    }

    /// Did the primary engine initialize successfully
    pub fn is_loaded(&self) -> bool {
        self.inner.lock().loaded
    }

    /// Is the primary engine unusable
    pub fn is_failed(&self) -> bool {
        self.inner.lock().failed
    }

    /// Snapshot of the recorded failure, if any
    pub fn report(&self) -> Option<ErrorReport> {
        self.inner.lock().report.clone()
    }

    /// Consume the one-shot latch
    ///
    /// Returns the pending report exactly once after a failure and clears
    /// the latch in the same critical section; the report itself stays
    /// recorded for handlers that read it outside the latch.
    pub fn take_pending_report(&self) -> Option<ErrorReport> {
        let mut inner = self.inner.lock();
        if !inner.show_error {
            return None;
        }
        inner.show_error = false;
        Some(inner.report.clone().unwrap_or_default())
    }

    /// Tear down at unload: back to the fresh state
    pub fn reset(&self) {
        *self.inner.lock() = StateInner::default();
    }
}
