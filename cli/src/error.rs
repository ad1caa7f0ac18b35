//! Fatal errors for one request lifecycle.
//!
//! # Design
//! Every failure after argument parsing ends the process. The variants only
//! record which step failed so the diagnostic names it; `main` prints the
//! message and exits with status 2. There is no retry and no distinction
//! between transient and permanent network failures.

use std::error::Error;
use std::fmt;
use std::io;

use gcurl_core::RequestError;

pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub enum FatalError {
    /// The options could not be turned into a request: bad method, URL or
    /// header.
    Construct(BoxError),

    /// The request body could not be read from stdin.
    ReadBody(RequestError),

    /// The request could not be sent or no response was received.
    Send(ureq::Error),

    /// Copying the response body to stdout failed.
    Relay(io::Error),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::Construct(err) => {
                write!(f, "Could not create request from options: {err}")
            }
            FatalError::ReadBody(err) => write!(f, "Error reading body from stdin: {err}"),
            FatalError::Send(err) => write!(f, "Error in response: {err}"),
            FatalError::Relay(err) => {
                write!(f, "Could not copy response body to stdout: {err}")
            }
        }
    }
}

impl Error for FatalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FatalError::Construct(err) => Some(err.as_ref()),
            FatalError::ReadBody(err) => Some(err),
            FatalError::Send(err) => Some(err),
            FatalError::Relay(err) => Some(err),
        }
    }
}

impl From<ureq::http::Error> for FatalError {
    fn from(err: ureq::http::Error) -> Self {
        FatalError::Construct(Box::new(err))
    }
}

impl From<ureq::http::uri::InvalidUri> for FatalError {
    fn from(err: ureq::http::uri::InvalidUri) -> Self {
        FatalError::Construct(Box::new(err))
    }
}
