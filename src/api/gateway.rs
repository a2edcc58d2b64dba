//! GraphQL endpoint handlers.

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::AppState;
use crate::graphql::graphiql_source;

pub const GRAPHQL_PATH: &str = "/api";

/// Executes a GraphQL request.
///
/// # Endpoint
/// `POST /api`
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphiQL IDE.
///
/// # Endpoint
/// `GET /api` (only when `server.graphiql` is enabled)
pub async fn graphiql() -> Html<String> {
    Html(graphiql_source(GRAPHQL_PATH))
}
