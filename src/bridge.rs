//! Primary engine contract
//!
//! The externally supplied response engine (typically an embedded
//! scripting runtime) sits behind this trait. The orchestrator owns the
//! handle; all lifetime management is ordinary ownership.

use crate::error::Result;

/// The primary response engine
///
/// Implementations answer lifecycle requests with their own scripted
/// responses; the emergency path covers every gap they leave.
pub trait ResponseEngine {
    /// Initialize with the configuration-root bytes
    ///
    /// An `Err` carries the human-readable message (and, when available, a
    /// textual failure trace) that degraded mode will later surface.
    fn initialize(&mut self, root: &[u8]) -> Result<()>;

    /// Produce the raw response for a request buffer
    ///
    /// `None` means the engine failed for this request; the caller falls
    /// back to degraded mode.
    fn handle_request(&mut self, raw: &[u8]) -> Option<Vec<u8>>;

    /// Tear down; reports whether shutdown was clean
    fn finalize(&mut self) -> bool;
}
