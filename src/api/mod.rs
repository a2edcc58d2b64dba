use axum::{
    Router,
    handler::Handler,
    http::HeaderValue,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::anilist::AnilistClient;
use crate::config::Config;
use crate::graphql::{MediaSchema, build_schema};
use crate::services::MediaSource;
use metrics_exporter_prometheus::PrometheusHandle;

mod error;
pub mod gateway;
mod observability;
mod types;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub schema: MediaSchema,

    pub graphiql: bool,

    pub cors_allowed_origins: Vec<String>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

#[must_use]
pub fn create_app_state(
    config: &Config,
    source: Arc<dyn MediaSource>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        schema: build_schema(source),
        graphiql: config.server.graphiql,
        cors_allowed_origins: config.server.cors_allowed_origins.clone(),
        prometheus_handle,
    })
}

pub fn create_app_state_from_config(
    config: &Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let anilist: Arc<dyn MediaSource> = Arc::new(AnilistClient::from_config(&config.upstream)?);
    Ok(create_app_state(config, anilist, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let graphql_route = if state.graphiql {
        get(gateway::graphiql).post(gateway::graphql_handler)
    } else {
        post(gateway::graphql_handler)
    };

    let cors_layer = cors_layer(&state.cors_allowed_origins);

    let routes = Router::new()
        .route(gateway::GRAPHQL_PATH, graphql_route)
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .fallback(error::not_found.layer(middleware::from_fn(observability::logging_middleware)))
        .with_state(state);

    with_middleware(routes).layer(cors_layer)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = if origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(CorsAny)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    layer.allow_methods(CorsAny).allow_headers(CorsAny)
}

fn with_middleware(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    ApiError::internal(format!("Handler panicked: {detail}")).into_response()
}
