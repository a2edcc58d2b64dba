use crate::config::UpstreamConfig;
use crate::models::media::MediaRecord;
use anyhow::Context;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const ANILIST_API: &str = "https://graphql.anilist.co";

pub const MEDIA_QUERY: &str = r#"
    query AnimeQuery($episodes: Int) {
        Media(episodes: $episodes) {
            episodes
            seasonInt
            coverImage {
                large
            }
            title {
                english
            }
            genres
            startDate {
                year
            }
            description
        }
    }
"#;

/// Failure talking to AniList.
///
/// `GraphQl` renders as the upstream message alone so clients see exactly
/// what AniList reported.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{message}")]
    GraphQl { message: String },

    #[error("AniList request failed: {0}")]
    Transport(String),

    #[error("AniList returned an unreadable response: {0}")]
    Decode(String),
}

impl UpstreamError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::GraphQl { .. } => "UPSTREAM_GRAPHQL_ERROR",
            Self::Transport(_) | Self::Decode(_) => "UPSTREAM_TRANSPORT_ERROR",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MediaRequest<'a> {
    pub query: &'a str,
    pub variables: MediaVariables,
}

/// Variables bound to [`MEDIA_QUERY`]. `None` is sent as an explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaVariables {
    pub episodes: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<Data>,
    #[serde(default)]
    errors: Option<Vec<GraphQLErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "Media")]
    media: Option<MediaRecord>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorEntry {
    #[serde(default)]
    message: String,
}

impl GraphQLResponse {
    fn into_media(self) -> Result<Option<MediaRecord>, UpstreamError> {
        if let Some(first) = self.errors.and_then(|errors| errors.into_iter().next()) {
            return Err(UpstreamError::GraphQl {
                message: first.message,
            });
        }

        Ok(self.data.and_then(|d| d.media))
    }
}

#[derive(Debug, Clone)]
pub struct AnilistClient {
    client: Client,
    api_url: String,
}

impl AnilistClient {
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .context("Failed to build AniList HTTP client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub const fn media_request(episodes: Option<i32>) -> MediaRequest<'static> {
        MediaRequest {
            query: MEDIA_QUERY,
            variables: MediaVariables { episodes },
        }
    }

    /// Runs the fixed `Media` query once. No retries, no caching.
    pub async fn fetch_media(
        &self,
        episodes: Option<i32>,
    ) -> Result<Option<MediaRecord>, UpstreamError> {
        let request_body = Self::media_request(episodes);

        debug!(episodes = ?episodes, url = %self.api_url, "Querying AniList");

        let result = self.send(&request_body).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(UpstreamError::GraphQl { .. }) => "graphql_error",
            Err(_) => "transport_error",
        };
        metrics::counter!("upstream_requests_total", "outcome" => outcome).increment(1);

        if let Err(e) = &result {
            warn!(error = %e, outcome, "AniList media query failed");
        }

        result
    }

    async fn send(
        &self,
        request_body: &MediaRequest<'_>,
    ) -> Result<Option<MediaRecord>, UpstreamError> {
        let response = self
            .client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<GraphQLResponse>(&body) {
            Ok(envelope) => envelope.into_media(),
            Err(_) if !status.is_success() => Err(UpstreamError::Transport(format!(
                "HTTP {status} from {}",
                self.api_url
            ))),
            Err(e) => Err(UpstreamError::Decode(e.to_string())),
        }
    }
}
