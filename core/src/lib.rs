//! Request-building core for the `gcurl` command-line client.
//!
//! # Overview
//! Turns user-supplied options (method, URL, raw header list, body source)
//! into a plain-data `HttpRequest` without touching the network
//! (host-does-IO pattern). The binary crate executes the round-trip and
//! relays the response, which keeps everything here deterministic.
//!
//! # Design
//! - `RawHeaders` keeps the header flag as the user wrote it; `parse` turns it
//!   into a `HeaderMap` with set semantics per canonical name.
//! - `BodySource` resolves the body from either the flag or any `Read`, so
//!   stdin can be swapped for an in-memory reader in tests.
//! - `Options::to_request` is the only fallible step and reports through
//!   `RequestError`.

pub mod error;
pub mod headers;
pub mod http;
pub mod options;

pub use error::RequestError;
pub use headers::{canonical_header_key, HeaderMap, RawHeaders};
pub use http::HttpRequest;
pub use options::{BodySource, Options};
