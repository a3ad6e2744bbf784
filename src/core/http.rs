use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, Request, StatusCode};
use axum::response::Response;
use serde::Serialize;
use std::fmt::Write;

use crate::utils::error::{Result, UtilError};

const CRLF: &str = "\r\n";

/// HTTP/1.1 wire rendering of a request or response, for debug logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpDump {
    pub text: String,
    pub bytes: Vec<u8>,
}

pub fn to_json_response<T: Serialize + ?Sized>(value: &T) -> Result<Response> {
    to_json_status_response(StatusCode::OK, value)
}

/// Serializes `value` into a response with the given status and a JSON content type.
///
/// Nothing is built when serialization fails, so a half-written body never reaches a client.
pub fn to_json_status_response<T: Serialize + ?Sized>(
    status: StatusCode,
    value: &T,
) -> Result<Response> {
    let body = serde_json::to_vec(value)?;

    let response = axum::http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))?;

    Ok(response)
}

/// Dumps a request whose body is already buffered.
pub fn dump_request<B: AsRef<[u8]>>(request: &Request<B>) -> HttpDump {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let mut head = format!("{} {} {:?}{}", request.method(), target, request.version(), CRLF);

    // Host 緊接在請求行之後；沒有 Host 標頭時用 URI 的 authority 補上
    match request.headers().get(header::HOST) {
        Some(host) => {
            let host = String::from_utf8_lossy(host.as_bytes());
            let _ = write!(head, "Host: {}{}", host, CRLF);
        }
        None => {
            if let Some(authority) = request.uri().authority() {
                let _ = write!(head, "Host: {}{}", authority, CRLF);
            }
        }
    }

    render(
        head,
        request.headers(),
        Some(&header::HOST),
        request.body().as_ref(),
    )
}

/// Dumps a client response, consuming its body.
pub async fn dump_response(response: reqwest::Response) -> Result<HttpDump> {
    let head = format!("{:?} {}{}", response.version(), response.status(), CRLF);
    let headers = response.headers().clone();

    let body = response.bytes().await.map_err(|e| {
        tracing::warn!("Got an error attempting to dump the response: {}", e);
        UtilError::Http(e)
    })?;

    Ok(render(head, &headers, None, &body))
}

fn render(
    mut head: String,
    headers: &HeaderMap,
    skip: Option<&HeaderName>,
    body: &[u8],
) -> HttpDump {
    for (name, value) in headers {
        if Some(name) == skip {
            continue;
        }
        let _ = write!(
            head,
            "{}: {}{}",
            canonical_header_name(name.as_str()),
            String::from_utf8_lossy(value.as_bytes()),
            CRLF
        );
    }
    head.push_str(CRLF);

    let mut bytes = head.into_bytes();
    bytes.extend_from_slice(body);
    let text = String::from_utf8_lossy(&bytes).into_owned();

    HttpDump { text, bytes }
}

/// `content-type` -> `Content-Type`; the http crate stores names lowercased.
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
