//! Request logging and HTTP metrics.
//!
//! The middleware is attached twice: as a route layer on the matched routes,
//! where [`MatchedPath`] is available, and directly on the fallback handler.

use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Metrics label shared by every request that matched no route.
pub const UNMATCHED_ROUTE: &str = "<unmatched>";

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

fn outcome(status: u16) -> &'static str {
    match status {
        500.. => "error",
        400.. => "client_error",
        _ => "success",
    }
}

fn route_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |mp| mp.as_str().to_string())
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let method = req.method().to_string();
    let route = route_label(&req);

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %req.uri().path(),
        route = %route,
    );

    async move {
        let response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status().as_u16();
        let outcome = outcome(status);

        let labels = [
            ("method", method),
            ("path", route),
            ("status", status.to_string()),
        ];

        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        info!(
            event = "http_request_finished",
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            status_code = status,
            user_agent = %user_agent,
            outcome,
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_buckets() {
        assert_eq!(outcome(200), "success");
        assert_eq!(outcome(304), "success");
        assert_eq!(outcome(404), "client_error");
        assert_eq!(outcome(405), "client_error");
        assert_eq!(outcome(500), "error");
        assert_eq!(outcome(502), "error");
    }

    #[test]
    fn test_route_label_without_match() {
        let req = Request::builder()
            .uri("/wp-admin/setup.php")
            .body(axum::body::Body::empty())
            .unwrap();

        assert_eq!(route_label(&req), UNMATCHED_ROUTE);
    }
}
