//! Request definitions
//!
//! Represents a parsed SHIORI request.

use crate::headers::Headers;

/// A parsed request
///
/// `name` is present only for 2.x requests and carries the command class
/// (`Version`, `Sentence`, `String`, ...); a 3.0 request line has no name
/// token. `version` is the trailing token of the first line and is `None`
/// only when the buffer ended before the first CRLF.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// First whitespace-delimited token of the first line, as received;
    /// normalized to uppercase at routing time
    pub method: String,

    /// Command class token (2.x only)
    pub name: Option<String>,

    /// Trailing version token of the first line
    pub version: Option<String>,

    /// Every `Key: Value` line up to the first blank line, in wire order
    pub headers: Headers,
}
