//! Send one HTTP request from the command line and stream the response body
//! to stdout.
//!
//! # Overview
//! `run` drives a single request lifecycle: options are resolved from the
//! parsed flags (reading stdin if asked), turned into a request by
//! `gcurl-core`, sent with a blocking ureq agent, and the response body is
//! copied byte-for-byte to the given writer. Nothing else is printed there.
//!
//! # Design
//! - `run` takes stdin and stdout as generic `Read`/`Write` so the whole
//!   lifecycle can be driven in tests without a subprocess.
//! - A missing URL is not an error but an `Outcome`; `main` owns the exit
//!   code policy (1 for usage, 2 for a `FatalError`).
//! - The response body is owned by `run` and dropped on every path.

use std::io::{Read, Write};

use gcurl_core::Options;
use tracing::{debug, info};

pub mod args;
pub mod error;
pub mod trace;
pub mod transport;

pub use args::{normalize, usage, write_usage, Args};
pub use error::FatalError;
pub use transport::{relay, Transport};

/// How a lifecycle that did not hit a fatal error ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response body was relayed; carries the number of bytes written.
    Relayed(u64),
    /// No URL was given. Nothing was read, sent or written.
    MissingUrl,
}

/// Perform the request described by `args`, writing the response body to
/// `stdout`.
pub fn run<R: Read, W: Write>(args: Args, stdin: R, stdout: W) -> Result<Outcome, FatalError> {
    let Some(url) = args.url.clone() else {
        return Ok(Outcome::MissingUrl);
    };

    let options = Options::new(
        args.method.clone(),
        url,
        args.raw_headers(),
        args.body_source(),
        stdin,
    )
    .map_err(FatalError::ReadBody)?;
    let request = options
        .to_request()
        .map_err(|err| FatalError::Construct(err.into()))?;

    let mut response = Transport::new().send(&request)?;
    info!(status = %response.status(), version = ?response.version(), "response received");

    let copied = relay(response.body_mut().as_reader(), stdout).map_err(FatalError::Relay)?;
    debug!(bytes = copied, "response body relayed");
    Ok(Outcome::Relayed(copied))
}
