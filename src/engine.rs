//! Engine Module
//!
//! The orchestrator tying the pieces together: the host-facing
//! load/request/unload lifecycle, the optional primary response engine,
//! and the always-available emergency fallback.
//!
//! ## Responsibilities
//! - Stash the configuration root at load (the only thing load needs)
//! - Offer each request to the primary engine first
//! - Record engine failures once and surface them once (one-shot latch)
//! - Guarantee a well-formed response buffer for every request

use bytes::Bytes;

use crate::bridge::ResponseEngine;
use crate::config::Config;
use crate::emergency;
use crate::error::KagariError;
use crate::state::{ErrorReport, SharedState};

/// Recorded when the primary engine yields nothing for a request
const NO_RESPONSE_MESSAGE: &str = "Primary response engine produced no response.";

/// The SHIORI orchestrator
///
/// The host calls `load` once, `request` any number of times, then
/// `unload` once; the whole lifecycle is synchronous. The emergency path
/// never depends on the primary engine, so `request` always answers.
pub struct Shiori {
    /// Response identity and menu targets
    config: Config,

    /// Configuration-root bytes stashed at load
    root: Option<Vec<u8>>,

    /// The primary response engine, when the host attached one
    engine: Option<Box<dyn ResponseEngine>>,

    /// Loaded/failed flags, recorded failure, one-shot latch
    state: SharedState,
}

impl Shiori {
    /// Orchestrator with no primary engine: degraded mode only
    pub fn new(config: Config) -> Self {
        Self {
            config,
            root: None,
            engine: None,
            state: SharedState::new(),
        }
    }

    /// Orchestrator with a primary engine attached
    pub fn with_engine(config: Config, engine: Box<dyn ResponseEngine>) -> Self {
        Self {
            engine: Some(engine),
            ..Self::new(config)
        }
    }

    /// Load: stash the configuration root, then try the primary engine
    ///
    /// Stashing the root is the only requirement for success; an engine
    /// initialization failure is recorded for degraded-mode reporting and
    /// does not fail the load.
    pub fn load(&mut self, root: &[u8]) -> bool {
        self.root = Some(root.to_vec());
        if let Some(engine) = self.engine.as_mut() {
            match engine.initialize(root) {
                Ok(()) => {
                    self.state.mark_loaded();
                    tracing::info!("Primary response engine initialized");
                }
                Err(e) => {
                    tracing::warn!("Primary response engine failed to initialize: {}", e);
                    self.state.record_load_failure(report_from_error(e));
                }
            }
        }
        true
    }

    /// Answer a request; never fails
    ///
    /// The primary engine gets the first chance while it is usable. When
    /// it is absent, unusable, or silent for this request, the emergency
    /// path covers the gap and answers malformed input with a 400
    /// response rather than an error.
    pub fn request(&mut self, raw: &[u8]) -> Bytes {
        if self.state.is_loaded() && !self.state.is_failed() {
            if let Some(engine) = self.engine.as_mut() {
                if let Some(out) = engine.handle_request(raw) {
                    return Bytes::from(out);
                }
                tracing::warn!("Primary response engine fell silent; answering in degraded mode");
                self.state
                    .record_request_failure(ErrorReport::new(NO_RESPONSE_MESSAGE));
            }
        }
        Bytes::from(emergency::respond(raw, &self.config, &self.state))
    }

    /// Unload: finalize the engine unless it already failed, drop state
    pub fn unload(&mut self) -> bool {
        if let Some(engine) = self.engine.as_mut() {
            if !self.state.is_failed() && !engine.finalize() {
                tracing::warn!("Primary response engine reported an unclean shutdown");
            }
        }
        self.root = None;
        self.state.reset();
        tracing::info!("Unloaded");
        true
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// The stashed configuration root, if loaded
    pub fn root(&self) -> Option<&[u8]> {
        self.root.as_deref()
    }

    /// The shared lifecycle state
    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// The configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Convert an engine error into the report degraded mode embeds
fn report_from_error(error: KagariError) -> ErrorReport {
    match error {
        KagariError::Engine { message, traceback } => ErrorReport { message: Some(message), traceback },
        other => ErrorReport::new(other.to_string()),
    }
}
