//! Command-line flags.
//!
//! Flags keep their historical single-dash spelling (`-method POST`,
//! `-stdin=true`). clap only knows `--long` flags, so `normalize` rewrites
//! the known single-dash names before parsing. Flag parsing stops at the
//! first positional argument: the URL, and anything after it is ignored.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use gcurl_core::{BodySource, RawHeaders};

pub const DEFAULT_HEADERS: &str = "\"Content-Type=application/json\"";

/// Flags whose value may follow as a separate argument.
const VALUE_FLAGS: &[&str] = &["method", "headers", "body"];
const SWITCH_FLAGS: &[&str] = &["stdin", "help", "version"];

#[derive(Debug, Parser)]
#[command(name = "gcurl")]
#[command(bin_name = "gcurl")]
#[command(version, about = "Send one HTTP request and print the response body", long_about = None)]
pub struct Args {
    /// Sets the http method to use
    #[arg(long, default_value = "GET", allow_hyphen_values = true)]
    pub method: String,

    /// Sets a list of headers to use. Every pair must be quoted and comma separated
    #[arg(long, default_value = DEFAULT_HEADERS, allow_hyphen_values = true)]
    pub headers: String,

    /// Data to include in request body
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub body: String,

    /// Set to true if body should be read from stdin instead of body flag
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub stdin: bool,

    /// URL to request
    pub url: Option<String>,

    /// Anything after the URL is ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Args {
    /// Parse process-style arguments, accepting single-dash long flags.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize(args))
    }

    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize(args))
    }

    pub fn raw_headers(&self) -> RawHeaders {
        RawHeaders::from_flag(&self.headers)
    }

    pub fn body_source(&self) -> BodySource {
        BodySource::new(self.stdin, self.body.clone())
    }
}

/// Text printed when no URL was given.
pub fn usage() -> String {
    let help = Args::command().render_help();
    format!("You must pass a url to request.\n\t - Example: gcurl [OPTIONS] URL\n{help}")
}

/// Write `usage` to `out` and flush it.
pub fn write_usage<W: Write>(mut out: W) -> io::Result<()> {
    out.write_all(usage().as_bytes())?;
    out.flush()
}

/// Rewrite `-name` and `-name=value` to `--name` forms for every known flag.
///
/// The argument following a value flag is its value and is never rewritten,
/// so `-body -method` sends the literal body `-method`. A `--` is inserted
/// before the first positional argument, so everything from the URL on is
/// passed through untouched, as is everything after an explicit `--`.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut args = args.into_iter().map(Into::<OsString>::into);
    if let Some(program) = args.next() {
        out.push(program);
    }

    let mut expect_value = false;
    let mut passthrough = false;
    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            passthrough = true;
            out.push(OsString::from("--"));
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (dashes, rest) = if let Some(rest) = text.strip_prefix("--") {
            ("--", rest)
        } else if let Some(rest) = text.strip_prefix('-') {
            ("-", rest)
        } else {
            passthrough = true;
            out.push(OsString::from("--"));
            out.push(arg);
            continue;
        };
        let (name, has_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };

        if VALUE_FLAGS.contains(&name) {
            expect_value = !has_value;
        } else if !SWITCH_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }
        if dashes == "-" {
            out.push(OsString::from(format!("-{text}")));
        } else {
            out.push(arg);
        }
    }
    out
}
