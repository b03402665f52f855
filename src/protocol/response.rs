//! Response definitions
//!
//! Represents a response to the host, prior to serialization.

use crate::headers::Headers;
use super::{SHIORI25_VERSION, SHIORI30_VERSION};

/// Response dialect, deciding the version token and the content key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SHIORI/2.5, the default response dialect
    V2,

    /// SHIORI/3.0
    V3,
}

impl Dialect {
    /// Version token on the status line
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::V2 => SHIORI25_VERSION,
            Dialect::V3 => SHIORI30_VERSION,
        }
    }

    /// Header key holding the scripted response text
    pub fn content_key(&self) -> &'static str {
        match self {
            Dialect::V2 => "Sentence",
            Dialect::V3 => "Value",
        }
    }
}

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NoContent,
    BadRequest,
    InternalServerError,
}

impl Status {
    /// Status-line token
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::NoContent => "204 No Content",
            Status::BadRequest => "400 Bad Request",
            Status::InternalServerError => "500 Internal Server Error",
        }
    }
}

/// A response under construction
///
/// Defaults to the 2.5 dialect and status 500, so any unhandled code path
/// still serializes to a well-formed server-error line.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response dialect
    pub version: Dialect,

    /// Status line token
    pub status: Status,

    /// Headers in insertion order; owned by the response until serialized
    pub headers: Headers,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            version: Dialect::V2,
            status: Status::InternalServerError,
            headers: Headers::new(),
        }
    }
}

impl Response {
    /// Set the dialect-dependent content header, replacing any prior value
    pub fn set_content(&mut self, value: &str) {
        self.headers.set(self.version.content_key(), value);
    }

    /// Append to the content header's value
    ///
    /// A no-op when the content header has not been set.
    pub fn append_content(&mut self, suffix: &str) {
        self.headers.append_value(self.version.content_key(), suffix);
    }

    /// Current content header value, if set
    pub fn content(&self) -> Option<&str> {
        self.headers.get_value(self.version.content_key())
    }
}
