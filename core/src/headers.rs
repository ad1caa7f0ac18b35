//! Raw header flag parsing and the structured header map.
//!
//! # Design
//! The user writes headers as one comma-separated flag value, each pair in
//! `name=value` form and optionally double-quoted. `RawHeaders` keeps those
//! pairs untouched; `RawHeaders::parse` turns them into a `HeaderMap`.
//!
//! Parsing is lossy and never fails:
//! - pairs without `=` are dropped;
//! - only the first two `=`-delimited segments are kept, so `a=b=c` becomes
//!   `A: b`;
//! - names are canonicalised and stored with set semantics, so a repeated name
//!   keeps only its last value.

/// Header pairs exactly as supplied on the command line, e.g.
/// `"Content-Type=application/json"` or `User-Agent=gcurl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHeaders(Vec<String>);

impl RawHeaders {
    /// Split a flag value on `,` into raw pairs. No trimming is done.
    pub fn from_flag(input: &str) -> Self {
        Self(input.split(',').map(str::to_string).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Build a `HeaderMap` from the raw pairs.
    pub fn parse(&self) -> HeaderMap {
        let mut parsed = HeaderMap::new();
        for line in &self.0 {
            let line = line.replace('"', "");
            let mut parts = line.split('=');
            if let (Some(name), Some(value)) = (parts.next(), parts.next()) {
                parsed.set(name, value);
            }
        }
        parsed
    }
}

/// Ordered mapping from canonical header name to its values.
///
/// Insertion order of names is preserved so the request goes out with headers
/// in the order the user wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value stored under `name` with `value`.
    pub fn set(&mut self, name: &str, value: &str) {
        let key = canonical_header_key(name);
        match self.position(&key) {
            Some(idx) => self.entries[idx].1 = vec![value.to_string()],
            None => self.entries.push((key, vec![value.to_string()])),
        }
    }

    /// Add `value` after any values already stored under `name`.
    pub fn append(&mut self, name: &str, value: &str) {
        let key = canonical_header_key(name);
        match self.position(&key) {
            Some(idx) => self.entries[idx].1.push(value.to_string()),
            None => self.entries.push((key, vec![value.to_string()])),
        }
    }

    /// First value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        let key = canonical_header_key(name);
        self.position(&key)
            .map(|idx| self.entries[idx].1.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every `(name, value)` pair, names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values.iter().map(move |value| (name.as_str(), value.as_str()))
        })
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == key)
    }
}

/// Canonical MIME form of a header name: the first letter and every letter
/// following a hyphen are upper-cased, the rest lower-cased.
///
/// Names containing a space or any byte that is not a valid header field
/// byte are returned unchanged, so the transport can reject them as given.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

/// RFC 7230 `tchar`.
pub(crate) fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
}
