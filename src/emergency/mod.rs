//! Emergency Module
//!
//! The self-contained degraded mode: canned, protocol-correct answers for
//! every defined lifecycle event, available whether or not a primary
//! response engine ever initialized. The pipeline is synchronous and
//! infallible: malformed input becomes a 400 response, not an error.

pub mod handlers;
pub mod script;

pub use handlers::EmergencyContext;

use crate::config::Config;
use crate::dispatch::dispatch;
use crate::protocol::{encode_response, parse_request, Response, Status};
use crate::state::SharedState;

/// Answer a raw request buffer entirely from the degraded path
///
/// Tokenize, dispatch, serialize. Always yields a well-formed response
/// buffer: parse failures serialize as `400 Bad Request`.
pub fn respond(raw: &[u8], config: &Config, state: &SharedState) -> Vec<u8> {
    let response = match parse_request(raw) {
        Ok(request) => dispatch(&request, config, state),
        Err(e) => {
            tracing::debug!("Malformed request: {}", e);
            let mut response = Response::default();
            response.status = Status::BadRequest;
            response
        }
    };
    encode_response(&response)
}
