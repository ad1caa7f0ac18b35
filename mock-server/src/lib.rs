use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Everything the server saw of one request, returned by `/inspect`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inspected {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/headers", any(echo_headers))
        .route("/body", any(echo_body))
        .route("/method", any(echo_method))
        .route("/inspect", any(inspect))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// One `Name: value` line per received header, names in canonical form.
async fn echo_headers(headers: HeaderMap) -> String {
    header_pairs(&headers)
        .into_iter()
        .map(|(name, value)| format!("{name}: {value}\n"))
        .collect()
}

async fn echo_body(body: Bytes) -> Bytes {
    body
}

async fn echo_method(method: Method) -> String {
    method.to_string()
}

async fn inspect(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Inspected> {
    Json(Inspected {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: header_pairs(&headers),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, String), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, format!("status {code}\n")))
}

/// Header names arrive lower-cased from hyper; restore the canonical
/// `X-Test` spelling so echoed output reads like what was sent.
fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                title_case(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

fn title_case(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
