//! Error types for request construction.
//!
//! # Design
//! Only two things can go wrong before the request leaves the process: the
//! method is not a valid HTTP token, or the body could not be read from its
//! source. Both are fatal to the caller; the variants exist so the message
//! names the failing step.

use std::fmt;
use std::io;

/// Errors returned while assembling an `HttpRequest` from `Options`.
#[derive(Debug)]
pub enum RequestError {
    /// The method is empty or contains a byte outside the HTTP token set.
    InvalidMethod(String),

    /// Reading the request body from its source failed.
    ReadBody(io::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidMethod(method) => {
                write!(f, "invalid method {method:?}")
            }
            RequestError::ReadBody(err) => write!(f, "could not read body: {err}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::InvalidMethod(_) => None,
            RequestError::ReadBody(err) => Some(err),
        }
    }
}
