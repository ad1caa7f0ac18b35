//! Per-invocation request options and body resolution.
//!
//! # Design
//! `Options` is built once from the command line and never mutated. The body
//! is resolved up front from a `BodySource`: either the literal flag value or
//! everything readable from a reader (stdin in the binary). The two are
//! mutually exclusive; when stdin is selected the flag value is ignored.

use std::io::Read;

use crate::error::RequestError;
use crate::headers::RawHeaders;
use crate::http::{is_valid_method, HttpRequest};

/// Where the request body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// The literal value of the body flag.
    Flag(String),
    /// The full contents of standard input.
    Stdin,
}

impl BodySource {
    pub fn new(use_stdin: bool, flag: String) -> Self {
        if use_stdin {
            BodySource::Stdin
        } else {
            BodySource::Flag(flag)
        }
    }

    /// Produce the body bytes. `stdin` is only read for `BodySource::Stdin`,
    /// and then until EOF.
    pub fn read<R: Read>(self, mut stdin: R) -> Result<Vec<u8>, RequestError> {
        match self {
            BodySource::Flag(body) => Ok(body.into_bytes()),
            BodySource::Stdin => {
                let mut buffer = Vec::new();
                stdin.read_to_end(&mut buffer).map_err(RequestError::ReadBody)?;
                Ok(buffer)
            }
        }
    }
}

/// Everything needed to issue one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub method: String,
    pub url: String,
    pub body: Vec<u8>,
    pub headers: RawHeaders,
}

impl Options {
    /// Resolve the body from `source` and assemble the options.
    pub fn new<R: Read>(
        method: String,
        url: String,
        headers: RawHeaders,
        source: BodySource,
        stdin: R,
    ) -> Result<Self, RequestError> {
        let body = source.read(stdin)?;
        Ok(Self {
            method,
            url,
            body,
            headers,
        })
    }

    /// Build the request with parsed headers attached.
    pub fn to_request(&self) -> Result<HttpRequest, RequestError> {
        if !is_valid_method(&self.method) {
            return Err(RequestError::InvalidMethod(self.method.clone()));
        }
        Ok(HttpRequest {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: self.headers.parse(),
            body: self.body.clone(),
        })
    }
}
