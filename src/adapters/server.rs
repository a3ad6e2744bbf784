use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Query};
use axum::http::request::Parts;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::collections::HashMap;

use crate::core::diagnostics::file_line;
use crate::core::http::{dump_request, to_json_response, to_json_status_response};
use crate::core::lookup::get_from_param;
use crate::core::phone::format_phone_us;
use crate::core::port::bind_addr;
use crate::core::ValidationError;
use crate::utils::error::Result;

pub const MAX_DUMP_BODY: usize = 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct PhoneResponse {
    pub input: String,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct PhoneErrorResponse {
    pub error: String,
    pub input: String,
    pub digit_count: usize,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/phone", get(phone))
        .route(
            "/dump",
            post(dump).layer(DefaultBodyLimit::max(MAX_DUMP_BODY)),
        )
}

/// Binds `listen_addr` (as produced by `resolve_port`) and serves until the process stops.
pub async fn serve(listen_addr: &str) -> Result<()> {
    let addr = bind_addr(listen_addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router()).await?;
    Ok(())
}

fn or_internal_error(built: Result<Response>) -> Response {
    built.unwrap_or_else(|e| {
        tracing::error!("{} failed to build JSON response: {}", file_line(), e);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })
}

async fn health() -> Response {
    or_internal_error(to_json_response(&HealthResponse {
        status: "ok".to_string(),
    }))
}

async fn phone(Query(params): Query<HashMap<String, String>>) -> Response {
    let input = get_from_param("number", &params);

    let built = match format_phone_us(&input) {
        Ok(formatted) => to_json_response(&PhoneResponse { input, formatted }),
        Err(err) => {
            tracing::debug!("Rejected phone input: {}", err);
            let ValidationError::WrongDigitCount { digit_count, .. } = &err;
            to_json_status_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &PhoneErrorResponse {
                    error: err.to_string(),
                    digit_count: *digit_count,
                    input,
                },
            )
        }
    };

    or_internal_error(built)
}

/// Echoes the request back as text. Bodies over [`MAX_DUMP_BODY`] get 413, unreadable bodies 400.
async fn dump(parts: Parts, body: std::result::Result<Bytes, BytesRejection>) -> Response {
    let bytes = match body {
        Ok(bytes) => bytes,
        Err(rejection) => {
            tracing::warn!("Got an error attempting to dump the request: {}", rejection);
            return rejection.into_response();
        }
    };

    let dumped = dump_request(&Request::from_parts(parts, bytes));
    tracing::debug!("Dumped request:\n{}", dumped.text);

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        dumped.bytes,
    )
        .into_response()
}
