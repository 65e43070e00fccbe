//! Owned data types shared between collection and classification.
//!
//! All types here are fully owned and `Send` so they can cross from the
//! background fetch task to the UI thread inside event payloads.

use std::fmt;

use crate::error::CollectError;

/// One line of user input with its derived video identifier.
///
/// `video_id` is `Some` for a recognized URL and `None` for the invalid
/// marker. The marker is never an empty string; extraction guarantees a
/// non-empty identifier or `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// The trimmed input line, kept verbatim as the entry key. Duplicate
    /// URLs stay as independent entries.
    pub url: String,
    /// Extracted video identifier, or `None` when the URL is unrecognized.
    pub video_id: Option<String>,
}

/// One page of up to 100 top-level comments plus the continuation token.
///
/// An absent `next_page_token` means pagination is complete.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    /// Display text of each top-level comment on this page, in API order.
    pub comments: Vec<String>,
    /// Opaque continuation token; `None` when no pages remain.
    pub next_page_token: Option<String>,
}

/// Everything collected for a single identifier, failure included.
///
/// When `error` is `Some`, `comments` holds whatever pages arrived before
/// the failure (possibly empty). There is no retry; a failed page request
/// simply terminates that identifier's collection.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Comments collected so far, in pagination order.
    pub comments: Vec<String>,
    /// The failure that stopped pagination, if any.
    pub error: Option<CollectError>,
}

/// Per-URL result inside a [`FetchReport`].
#[derive(Debug)]
pub enum UrlResult {
    /// The URL could not be parsed to an identifier; never hit the network.
    Invalid,
    /// Collection ran for this identifier (fully or partially).
    Fetched(FetchOutcome),
}

/// The result for one input URL, keyed by the literal trimmed string.
#[derive(Debug)]
pub struct UrlReport {
    /// The input URL this result belongs to.
    pub url: String,
    /// What happened for this URL.
    pub result: UrlResult,
}

/// Aggregated outcome of one fetch action across all input URLs.
///
/// Entries preserve input order. The caller overwrites its session store
/// wholesale with each report.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// One entry per input URL, in input order.
    pub entries: Vec<UrlReport>,
}

impl FetchReport {
    /// Iterates over `(url, comments)` for entries that reached collection,
    /// including partial results. Invalid entries are skipped.
    pub fn comment_lists(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().filter_map(|entry| match &entry.result {
            UrlResult::Fetched(outcome) => Some((entry.url.as_str(), outcome.comments.as_slice())),
            UrlResult::Invalid => None,
        })
    }
}

/// Discrete sentiment bucket for one comment or one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(text)
    }
}

/// One classified comment.
///
/// `label` is a deterministic function of `score` via the fixed thresholds
/// in [`crate::sentiment::label_for`].
#[derive(Debug, Clone)]
pub struct SentimentRecord {
    /// Original comment text.
    pub text: String,
    /// Compound polarity score in [-1.0, 1.0].
    pub score: f64,
    /// Bucketed label derived from `score`.
    pub label: SentimentLabel,
}

/// Aggregate figures over one video's classified comments.
#[derive(Debug, Clone)]
pub struct SentimentSummary {
    /// Number of Positive records.
    pub positive: usize,
    /// Number of Negative records.
    pub negative: usize,
    /// Number of Neutral records.
    pub neutral: usize,
    /// Arithmetic mean of scores; 0.0 when there are no records.
    pub mean_score: f64,
    /// Overall label: the threshold rule applied to `mean_score`.
    pub overall: SentimentLabel,
}

impl SentimentSummary {
    /// Returns the count for `label`.
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }
}
