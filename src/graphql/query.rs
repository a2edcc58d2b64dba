use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::clients::anilist::UpstreamError;
use crate::models::media::MediaRecord;
use crate::services::MediaSource;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> Option<&'static str> {
        Some("Hello world!")
    }

    /// Media matching `episodes`, fetched live from AniList.
    #[graphql(name = "Media")]
    async fn media(
        &self,
        ctx: &Context<'_>,
        episodes: Option<i32>,
    ) -> Result<Option<MediaRecord>> {
        tracing::debug!(episodes = ?episodes, "GraphQL resolving Media");

        let source = ctx.data::<Arc<dyn MediaSource>>()?;

        match source.fetch_media(episodes).await {
            Ok(media) => {
                tracing::debug!(found = media.is_some(), "GraphQL Media resolved");
                Ok(media)
            }
            Err(e) => {
                tracing::error!("GraphQL Media resolver failed: {}", e);
                Err(upstream_error(&e))
            }
        }
    }
}

fn upstream_error(err: &UpstreamError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}
