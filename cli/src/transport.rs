//! Executes a core `HttpRequest` with ureq and relays the response body.
//!
//! # Design
//! The agent is configured to behave like a plain HTTP client: 4xx/5xx
//! responses are returned as data so their bodies are relayed, and extension
//! methods are allowed through. Everything else (redirects, pooling, TLS)
//! stays at ureq's defaults.

use std::io::{self, Read, Write};

use gcurl_core::HttpRequest;
use tracing::debug;
use ureq::http::{self, Uri};
use ureq::{Agent, Body};

use crate::error::FatalError;

/// Methods that carry a request body even when it is empty.
const BODY_METHODS: &[&str] = &["POST", "PUT", "PATCH"];

pub struct Transport {
    agent: Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Send `request` and block until the response head has arrived.
    pub fn send(&self, request: &HttpRequest) -> Result<http::Response<Body>, FatalError> {
        let builder = to_builder(request)?;
        debug!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            body_len = request.body.len(),
            "sending request"
        );

        let result = if request.body.is_empty() && !BODY_METHODS.contains(&request.method.as_str()) {
            self.agent.run(builder.body(())?)
        } else {
            self.agent.run(builder.body(request.body.clone())?)
        };
        result.map_err(FatalError::Send)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate the core request into an `http::request::Builder` with method,
/// URI and headers set. The URI must be absolute.
pub fn to_builder(request: &HttpRequest) -> Result<http::request::Builder, FatalError> {
    let uri: Uri = request.url.parse()?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(FatalError::Construct(
            format!("url {:?} must include a scheme and host", request.url).into(),
        ));
    }

    let mut builder = http::Request::builder()
        .method(request.method.as_str())
        .uri(uri);
    for (name, value) in request.headers.iter() {
        builder = builder.header(name, value);
    }
    Ok(builder)
}

/// Copy `body` to `out` until EOF, then flush. Returns the byte count.
pub fn relay<R: Read, W: Write>(mut body: R, mut out: W) -> io::Result<u64> {
    let copied = io::copy(&mut body, &mut out)?;
    out.flush()?;
    Ok(copied)
}
