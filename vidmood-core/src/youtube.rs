//! YouTube Data API v3 comment-listing client.
//!
//! Implements [`CommentSource`] over `GET {base}/commentThreads` with
//! `part=snippet`, a page size of 100, and the `pageToken` continuation
//! protocol. Only top-level comments are requested; replies are not part
//! of the thread snippet this client decodes.
//!
//! The API key comes from the caller (env var or config file); it is never
//! embedded here. The base URL is injectable so integration tests can point
//! the client at a local mock server.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::collect::CommentSource;
use crate::error::CollectError;
use crate::types::CommentPage;

const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum comments per page, the API's documented ceiling.
pub const PAGE_SIZE: u32 = 100;

/// Comment-listing client holding the shared HTTP client and credentials.
///
/// Build once per process and reuse; the client is stateless across calls
/// apart from the held API key.
pub struct YouTubeSource {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl YouTubeSource {
    /// Creates a client for the production API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CollectError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { http, api_key: api_key.into(), api_base: DEFAULT_API_BASE.to_owned() })
    }

    /// Overrides the API base URL. Intended for tests against a mock server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }
}

// Response shape: items[].snippet.topLevelComment.snippet.textDisplay,
// plus nextPageToken at the top level.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    next_page_token: Option<String>,
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl CommentSource for YouTubeSource {
    async fn comment_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, CollectError> {
        let page_size = PAGE_SIZE.to_string();
        let mut request = self
            .http
            .get(format!("{}/commentThreads", self.api_base))
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Prefer the structured error payload; fall back to raw text.
            let message = serde_json::from_slice::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(CollectError::Api { status: status.as_u16(), message });
        }

        let decoded: CommentThreadListResponse = serde_json::from_slice(&body)
            .map_err(|err| CollectError::Malformed(err.to_string()))?;

        let comments = decoded
            .items
            .into_iter()
            .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
            .collect();

        Ok(CommentPage { comments, next_page_token: decoded.next_page_token })
    }
}
