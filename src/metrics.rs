//! Prometheus metrics.
//!
//! HTTP traffic is recorded by [`metrics_middleware`]; authorization outcomes
//! by [`track_access_decision`] from both the route enforcer and the page
//! guards. Set `OBSERVABILITY_ENABLED=false` to turn all of it off.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use tracing::warn;

use appsynex_core::AccessState;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";
pub const HTTP_REQUESTS_ACTIVE: &str = "http_requests_active";
pub const ACCESS_DECISIONS_TOTAL: &str = "access_decisions_total";
pub const SESSION_TOKENS_REJECTED_TOTAL: &str = "session_tokens_rejected_total";

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

pub fn is_observability_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(true)
    })
}

/// Install the Prometheus recorder. `None` when observability is off or a
/// recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let installed = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION.to_string()),
            LATENCY_BUCKETS,
        )
        .and_then(PrometheusBuilder::install_recorder);

    let handle = match installed {
        Ok(handle) => handle,
        Err(err) => {
            warn!(error = %err, "Prometheus recorder not installed; metrics disabled");
            return None;
        }
    };

    let upkeep = handle.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            upkeep.run_upkeep();
        }
    });

    Some(handle)
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let active = gauge!(HTTP_REQUESTS_ACTIVE);
    active.increment(1.0);
    let response = next.run(req).await;
    active.decrement(1.0);

    let status = response.status();
    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.as_u16().to_string(),
        "class" => status_class(status)
    )
    .increment(1);
    histogram!(HTTP_REQUEST_DURATION, "method" => method, "path" => path)
        .record(start.elapsed().as_secs_f64());

    response
}

/// Scrape endpoint.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

/// Count one authorization decision. `adapter` is `route` for the enforcer
/// and `guard` for page actions.
pub fn track_access_decision(adapter: &'static str, outcome: &AccessState) {
    if !is_observability_enabled() {
        return;
    }
    let reason = outcome.deny_reason().map_or("none", |reason| reason.code());
    counter!(
        ACCESS_DECISIONS_TOTAL,
        "adapter" => adapter,
        "outcome" => outcome.label(),
        "reason" => reason
    )
    .increment(1);
}

pub fn track_session_rejected() {
    if is_observability_enabled() {
        counter!(SESSION_TOKENS_REJECTED_TOTAL).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusCode::OK), "2xx");
        assert_eq!(status_class(StatusCode::TEMPORARY_REDIRECT), "3xx");
        assert_eq!(status_class(StatusCode::FORBIDDEN), "4xx");
        assert_eq!(status_class(StatusCode::BAD_GATEWAY), "5xx");
    }
}
