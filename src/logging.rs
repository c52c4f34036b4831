//! Tracing setup and per-request logging.
//!
//! Three sinks: a compact console log filtered by `RUST_LOG`, a daily error
//! log, and a daily JSON log carrying span context. Log files go to
//! `LOG_DIR` (default `storage/logs`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const DEFAULT_LOG_DIR: &str = "storage/logs";

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub dir: PathBuf,
    /// Used when `RUST_LOG` is unset.
    pub default_directives: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            dir: std::env::var("LOG_DIR")
                .unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string())
                .into(),
            default_directives: format!(
                "{}=info,appsynex_auth=info,appsynex_ui=info,tower_http=warn",
                env!("CARGO_CRATE_NAME")
            ),
        }
    }
}

pub fn init_tracing() -> anyhow::Result<()> {
    let settings = LogSettings::from_env();
    std::fs::create_dir_all(&settings.dir)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.default_directives));

    let console = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let errors = fmt::layer()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &settings.dir,
            "appsynex.log",
        ))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(EnvFilter::new("error"));

    let structured = fmt::layer()
        .json()
        .with_writer(RollingFileAppender::new(
            Rotation::DAILY,
            &settings.dir,
            "appsynex.json",
        ))
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console)
        .with(errors)
        .with(structured)
        .try_init()?;

    info!(log_dir = %settings.dir.display(), "Tracing initialized");
    Ok(())
}

/// The caller's request id when it sent a usable one, a fresh UUID otherwise.
fn request_id(req: &Request) -> String {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= 64)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn log_completion(status: StatusCode, latency: Duration) {
    let status_code = status.as_u16();
    let latency_ms = latency.as_millis();
    if status.is_server_error() {
        error!(status = status_code, latency_ms, "Server error");
    } else if status.is_client_error() {
        warn!(status = status_code, latency_ms, "Client error");
    } else {
        info!(status = status_code, latency_ms, "Request completed");
    }
}

/// Logs every request inside a span keyed by its request id, and echoes the
/// id back in `x-request-id`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = request_id(&req);
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
    );

    async move {
        info!("Incoming request");
        let mut response = next.run(req).await;
        log_completion(response.status(), start.elapsed());

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_id_reuses_caller_header() {
        let req = Request::builder()
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req), "abc-123");
    }

    #[test]
    fn test_request_id_generated_when_missing_or_oversized() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(request_id(&req).len(), 36);

        let req = Request::builder()
            .header("x-request-id", "x".repeat(100))
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_id(&req).len(), 36);
    }
}
