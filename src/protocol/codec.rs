//! Protocol codec
//!
//! A character-by-character tokenizer for the request grammar and the
//! inverse serializer for responses. No external tokenizer: the scanner is
//! a tagged state machine over the raw byte slice with explicit
//! token-start tracking.
//!
//! ## Scanner States
//! ```text
//! RequestLine  ──CRLF──▶  HeaderKey  ──':'──▶  HeaderGap  ──byte──▶  HeaderValue
//!                             ▲                                          │
//!                             └──────────────── commit ◀────CRLF─────────┘
//! ```
//!
//! An empty header line terminates the scan; the rest of the buffer is
//! ignored. Only `\r\n` ends a line; a bare LF or CR is an ordinary byte.

use crate::error::{KagariError, Result};
use crate::headers::Headers;
use super::{Request, Response, SHIORI30_VERSION};

/// Scanner state register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// First line: method, optional name, version
    RequestLine,

    /// Header key, up to `:`; an empty line ends the headers
    RequestHeaderKey,

    /// Literal spaces between `:` and the value
    RequestHeaderGap,

    /// Header value, up to CRLF
    RequestHeaderValue,
}

/// Decode raw token bytes
///
/// The wire may carry any declared charset; non-UTF-8 sequences are
/// replaced rather than rejected, since this engine only ever answers in
/// US-ASCII.
fn token(raw: &[u8], start: usize, end: usize) -> String {
    String::from_utf8_lossy(&raw[start..end]).into_owned()
}

// =============================================================================
// Request Tokenizer
// =============================================================================

/// Parse a raw buffer into a structured request
///
/// Errors only on a malformed first line: an empty token before a
/// separator, or end-of-line before any method token. Reaching
/// end-of-buffer inside the headers, or on the first line with a method
/// already captured, is a valid parse.
pub fn parse_request(raw: &[u8]) -> Result<Request> {
    let mut req = Request {
        method: String::new(),
        name: None,
        version: None,
        headers: Headers::new(),
    };

    let mut state = ScanState::RequestLine;
    // Start index of the token being accumulated
    let mut start: Option<usize> = None;
    // Scratch key for the header line in progress; dropped at every line
    // boundary and on early exit
    let mut pending_key: Option<String> = None;

    let mut i = 0;
    while i < raw.len() {
        let byte = raw[i];
        match state {
            // -----------------------------------------------------------------
            // First line
            // -----------------------------------------------------------------
            ScanState::RequestLine => {
                if byte != b' ' && start.is_none() {
                    start = Some(i);
                } else if byte == b' ' {
                    let Some(s) = start else {
                        return Err(KagariError::Protocol(
                            "empty token in request line".to_string(),
                        ));
                    };
                    if req.method.is_empty() {
                        req.method = token(raw, s, i);
                        start = None;
                    } else if req.name.is_none() && req.version.is_none() {
                        let second = token(raw, s, i);
                        if second == SHIORI30_VERSION {
                            req.version = Some(second);
                        } else {
                            req.name = Some(second);
                        }
                        start = None;
                    }
                    // Tokens past the second are not committed at spaces;
                    // the trailing run becomes the version at end of line.
                } else if byte == b'\n' && i > 0 && raw[i - 1] == b'\r' {
                    if req.method.is_empty() {
                        return Err(KagariError::Protocol(
                            "request line ended before a method token".to_string(),
                        ));
                    }
                    if req.version.is_none() {
                        // `start` is set at latest by the CR itself
                        if let Some(s) = start {
                            req.version = Some(token(raw, s, i - 1));
                        }
                    }
                    start = None;
                    state = ScanState::RequestHeaderKey;
                }
            }

            // -----------------------------------------------------------------
            // Headers
            // -----------------------------------------------------------------
            ScanState::RequestHeaderKey => {
                if start.is_none() {
                    start = Some(i);
                }
                if byte == b':' {
                    pending_key = start.map(|s| token(raw, s, i));
                    start = None;
                    state = ScanState::RequestHeaderGap;
                } else if byte == b'\n' && raw[i - 1] == b'\r' {
                    // A blank line terminates the headers; a non-empty
                    // line without a colon is skipped.
                    let line_empty = start.map(|s| s >= i - 1).unwrap_or(true);
                    if line_empty {
                        break;
                    }
                    start = None;
                }
            }

            ScanState::RequestHeaderGap => {
                if byte != b' ' {
                    // Value starts here; a CR immediately after the gap
                    // yields an empty value at the CRLF below.
                    start = Some(i);
                    state = ScanState::RequestHeaderValue;
                }
            }

            ScanState::RequestHeaderValue => {
                if byte == b'\n' && raw[i - 1] == b'\r' {
                    let s = start.unwrap_or(i);
                    let value = if s < i - 1 { token(raw, s, i - 1) } else { String::new() };
                    // Committed copies; the scratch pair dies with the line
                    req.headers.push(pending_key.take().unwrap_or_default(), value);
                    start = None;
                    state = ScanState::RequestHeaderKey;
                }
            }
        }
        i += 1;
    }

    if state == ScanState::RequestLine && req.method.is_empty() {
        return Err(KagariError::Protocol(
            "request ended before a method token".to_string(),
        ));
    }

    Ok(req)
}

// =============================================================================
// Response Serializer
// =============================================================================

/// Serialize a response into its exact wire byte sequence
///
/// `"<version> <status>\r\n"`, one `"<key>: <value>\r\n"` per header in
/// insertion order, then a terminating `"\r\n"`. The length is accounted
/// for up front, separator bytes included; the returned buffer is the
/// exact byte count.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let version = response.version.as_str();
    let status = response.status.as_str();

    // status line + terminator, then every header line
    let mut expected = version.len() + 1 + status.len() + 2 + 2;
    for header in response.headers.iter() {
        expected += header.key.len() + 2 + header.value.len() + 2;
    }

    let mut buf = Vec::with_capacity(expected);
    buf.extend_from_slice(version.as_bytes());
    buf.push(b' ');
    buf.extend_from_slice(status.as_bytes());
    buf.extend_from_slice(b"\r\n");
    for header in response.headers.iter() {
        buf.extend_from_slice(header.key.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(header.value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }
    buf.extend_from_slice(b"\r\n");

    debug_assert_eq!(buf.len(), expected);
    buf
}
