//! GraphQL schema served on `/api`.
//!
//! The schema is built once at startup and shared by every request handler;
//! `Schema` is internally reference counted, so clones are cheap.

mod query;

pub use query::QueryRoot;

use crate::services::MediaSource;
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

pub type MediaSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(source: Arc<dyn MediaSource>) -> MediaSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(source)
        .finish()
}

#[must_use]
pub fn graphiql_source(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}
