//! The request handed to the transport, described as plain data.
//!
//! # Design
//! The core builds `HttpRequest` values and never executes them; the binary
//! crate translates one into its HTTP client's request type and performs the
//! round-trip. URL and header validity are left to that translation, since
//! the transport is the authority on what it can send.

use crate::headers::{is_token_byte, HeaderMap};

/// A single outgoing HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// A method is any non-empty HTTP token, so extension methods such as
/// `PROPFIND` pass while `GET POST` or `""` do not.
pub fn is_valid_method(method: &str) -> bool {
    !method.is_empty() && method.bytes().all(is_token_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_and_extension_methods_are_valid() {
        for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "PROPFIND", "get"] {
            assert!(is_valid_method(method), "{method}");
        }
    }

    #[test]
    fn empty_or_spaced_methods_are_invalid() {
        for method in ["", "GET POST", "GET\n", "PO(ST"] {
            assert!(!is_valid_method(method), "{method:?}");
        }
    }
}
