//! Protocol Module
//!
//! Defines the SHIORI wire grammar shared by both dialects.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! GET Sentence SHIORI/2.2\r\n        (2.x: method, name, version)
//! GET SHIORI/3.0\r\n                 (3.0: method, version)
//! Key: Value\r\n                     (zero or more headers)
//! \r\n                               (terminator)
//! ```
//!
//! ### Response
//! ```text
//! SHIORI/2.5 200 OK\r\n              (version, status)
//! Key: Value\r\n                     (headers in insertion order)
//! \r\n                               (terminator)
//! ```
//!
//! Line endings are `\r\n` exclusively; a bare LF or CR is an ordinary byte.
//! The content header is dialect-dependent: `Sentence` for SHIORI/2.5,
//! `Value` otherwise.

mod request;
mod response;
mod codec;

pub use request::Request;
pub use response::{Dialect, Response, Status};
pub use codec::{encode_response, parse_request};

/// Version-magic prefix shared by all 2.x requests
pub const SHIORI2_VERSION_MAGIC: &str = "SHIORI/2";

/// Version-magic prefix shared by all 3.x requests
pub const SHIORI3_VERSION_MAGIC: &str = "SHIORI/3";

/// Full version literal of the default response dialect
pub const SHIORI25_VERSION: &str = "SHIORI/2.5";

/// Full version literal of the 3.0 dialect; the 3.0 request line is
/// detected by an exact match against this string
pub const SHIORI30_VERSION: &str = "SHIORI/3.0";
