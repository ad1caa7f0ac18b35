//! Verify header parsing and request building against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each case gives the raw `-headers` flag value and the ordered pairs the
//! parser must produce. The same vectors are fed through `Options` so the
//! request built for the transport carries exactly those headers.

use gcurl_core::{BodySource, Options, RawHeaders};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HeaderVectors {
    cases: Vec<HeaderCase>,
}

#[derive(Debug, Deserialize)]
struct HeaderCase {
    name: String,
    input: String,
    expected: Vec<(String, String)>,
}

fn load() -> HeaderVectors {
    let raw = include_str!("../../test-vectors/headers.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn header_parse_vectors() {
    for case in load().cases {
        let parsed = RawHeaders::from_flag(&case.input).parse();
        let actual: Vec<(String, String)> = parsed
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        assert_eq!(actual, case.expected, "{}", case.name);
        assert_eq!(parsed.len(), case.expected.len(), "{}: one value per name", case.name);
    }
}

#[test]
fn request_headers_match_vectors() {
    for case in load().cases {
        let options = Options::new(
            "GET".to_string(),
            "http://localhost:3000/headers".to_string(),
            RawHeaders::from_flag(&case.input),
            BodySource::Flag(String::new()),
            std::io::empty(),
        )
        .unwrap();
        let req = options.to_request().unwrap();

        for (name, value) in &case.expected {
            assert_eq!(req.headers.get(name), Some(value.as_str()), "{}: {name}", case.name);
        }
        assert_eq!(req.headers.len(), case.expected.len(), "{}", case.name);
        assert!(req.body.is_empty(), "{}: body should be empty", case.name);
    }
}
