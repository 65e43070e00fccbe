//! Error taxonomy for comment collection.
//!
//! Only failures of the external comment-listing service are errors.
//! An unparseable URL is a per-entry report item (`UrlResult::Invalid`) and
//! a video with zero comments is a soft warning at the UI layer; neither
//! appears here. No `CollectError` is fatal to the session: collection for
//! one identifier stops, partial comments are kept, and the other
//! identifiers proceed.

use thiserror::Error;

/// A failure while fetching one page of comments.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Transport-level failure: connect, timeout, TLS, or body read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. Covers quota and
    /// auth errors; `message` is taken from the error payload when the
    /// body decodes, otherwise the raw body text.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable reason extracted from the error payload.
        message: String,
    },

    /// The service answered 2xx but the body did not decode as a comment
    /// thread listing.
    #[error("malformed response: {0}")]
    Malformed(String),
}
