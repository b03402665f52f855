//! # kagari
//!
//! An emergency SHIORI response engine for desktop ghost agents:
//! - Hand-rolled byte tokenizer for the SHIORI/2.x and SHIORI/3.0 request grammars
//! - Insertion-ordered header store shared by requests and responses
//! - Version/event-based dispatch to degraded-mode lifecycle handlers
//! - Exact wire-grammar response serialization
//! - Always-available fallback when the primary response engine is absent or failed
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Host                                 │
//! │                load / request / unload                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Shiori Orchestrator                         │
//! │          (primary engine first, emergency fallback)          │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!   ┌─────────────────┐          ┌───────────────────┐
//!   │ ResponseEngine  │          │  Emergency Path   │
//!   │   (external)    │          │  parse → dispatch │
//!   └─────────────────┘          │    → serialize    │
//!                                └─────────┬─────────┘
//!                                          │
//!                                          ▼
//!                                ┌───────────────────┐
//!                                │  Degraded-Mode    │
//!                                │  Handlers         │
//!                                └───────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod state;

pub mod headers;
pub mod protocol;
pub mod dispatch;
pub mod emergency;
pub mod bridge;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KagariError, Result};
pub use config::Config;
pub use engine::Shiori;

// =============================================================================
// Identity
// =============================================================================

/// Current version of kagari, reported by the 3.0 `version` request
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name, reported by the 3.0 `name` request
pub const NAME: &str = "kagari";

/// Creator string, reported by the 3.0 `craftman` request
pub const CREATOR: &str = "Asagiri Works";
