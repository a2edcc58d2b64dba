//! Domain seam between the GraphQL `Media` resolver and the upstream API.

use crate::clients::anilist::{AnilistClient, UpstreamError};
use crate::models::media::MediaRecord;

/// Source of media records for the `Media` resolver.
///
/// Implementations perform at most one upstream call per invocation and
/// keep no state between calls.
///
/// # Examples
///
/// ```rust,ignore
/// use anigate::services::MediaSource;
/// use std::sync::Arc;
///
/// async fn example(source: Arc<dyn MediaSource>) {
///     let media = source.fetch_media(Some(12)).await;
/// }
/// ```
#[async_trait::async_trait]
pub trait MediaSource: Send + Sync {
    /// Looks up the media matching `episodes`. `Ok(None)` means upstream had no match.
    ///
    /// # Errors
    ///
    /// - Returns [`UpstreamError::GraphQl`] when upstream reports an error
    /// - Returns [`UpstreamError::Transport`] or [`UpstreamError::Decode`] when the call itself fails
    async fn fetch_media(
        &self,
        episodes: Option<i32>,
    ) -> Result<Option<MediaRecord>, UpstreamError>;
}

#[async_trait::async_trait]
impl MediaSource for AnilistClient {
    async fn fetch_media(
        &self,
        episodes: Option<i32>,
    ) -> Result<Option<MediaRecord>, UpstreamError> {
        AnilistClient::fetch_media(self, episodes).await
    }
}
