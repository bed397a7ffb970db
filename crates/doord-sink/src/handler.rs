use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::appender::Appender;
use crate::config::SinkConfig;
use crate::error::{SinkError, SinkResult};

/// Shared per-process state handed to every request.
pub struct SinkState {
    pub config: SinkConfig,
    pub appender: Appender,
}

impl SinkState {
    pub fn new(config: SinkConfig) -> Self {
        let appender = Appender::new(&config.output_path);
        Self { config, appender }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Catch-all handler: append the body of any `POST` to the output file.
pub async fn append_handler(
    State(state): State<Arc<SinkState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> SinkResult<StatusCode> {
    if method != Method::POST {
        return Err(SinkError::UnsupportedMethod(method.to_string()));
    }

    let declared = declared_length(&headers)?;
    info!(%method, path = uri.path(), length = declared, "request received");

    let read_limit = body_limit(declared, state.config.max_body_size)?;

    let timeout = state.config.read_timeout;
    let bytes = tokio::time::timeout(timeout, to_bytes(body, read_limit))
        .await
        .map_err(|_| SinkError::ReadTimeout(timeout))?
        .map_err(|e| SinkError::Body(e.to_string()))?;

    let actual = bytes.len() as u64;
    if actual != declared {
        return Err(SinkError::BodyMismatch { declared, actual });
    }

    state.appender.append(&bytes).await?;
    Ok(StatusCode::OK)
}

/// Byte limit for reading a body of `declared` bytes, capped by `limit`
/// and by what this platform can address.
fn body_limit(declared: u64, limit: u64) -> SinkResult<usize> {
    if declared > limit {
        return Err(SinkError::PayloadTooLarge { declared, limit });
    }
    usize::try_from(declared).map_err(|_| SinkError::PayloadTooLarge { declared, limit })
}

fn declared_length(headers: &HeaderMap) -> SinkResult<u64> {
    let value = headers
        .get(header::CONTENT_LENGTH)
        .ok_or(SinkError::LengthRequired)?;
    value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or_else(|| SinkError::InvalidLength(String::from_utf8_lossy(value.as_bytes()).into_owned()))
}
