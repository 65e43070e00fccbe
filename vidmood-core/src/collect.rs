//! Paginated comment collection.
//!
//! [`Collector`] drives a [`CommentSource`] page by page, following
//! continuation tokens until the source reports none remaining. Failures
//! are isolated per identifier: a failed page stops that identifier's
//! pagination, keeps whatever arrived before, and leaves every other
//! identifier unaffected.
//!
//! Collection logic never writes to any UI. Progress is surfaced as typed
//! [`CollectProgress`] values through a caller-supplied sink, and the final
//! [`FetchReport`] carries a success-with-partial-data or
//! failure-with-reason result per URL.

use async_trait::async_trait;

use crate::error::CollectError;
use crate::throttle::FixedDelay;
use crate::types::{CommentPage, FetchOutcome, FetchReport, UrlEntry, UrlReport, UrlResult};

/// The external comment-listing service, one page at a time.
///
/// Implementations return up to 100 top-level comments per call plus an
/// optional continuation token. The production impl is
/// [`crate::youtube::YouTubeSource`]; tests script their own.
#[async_trait]
pub trait CommentSource {
    /// Fetches one page of top-level comments for `video_id`.
    ///
    /// `page_token` is `None` for the first page and the previously
    /// returned continuation token afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError`] on transport failure, an error payload
    /// from the service, or an undecodable body.
    async fn comment_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<CommentPage, CollectError>;
}

/// Typed progress notice emitted while a multi-URL fetch runs.
///
/// The caller decides how to present these; nothing here assumes a UI.
#[derive(Debug, Clone)]
pub enum CollectProgress {
    /// Collection started for a valid identifier.
    Started {
        /// The input URL being collected.
        url: String,
    },
    /// The entry's URL did not parse to an identifier; it was skipped.
    Invalid {
        /// The offending input URL.
        url: String,
    },
    /// Collection completed without error. `count` may be zero.
    Finished {
        /// The input URL that finished.
        url: String,
        /// Number of comments collected.
        count: usize,
    },
    /// Collection stopped on a failure; `count` comments were kept.
    Failed {
        /// The input URL that failed.
        url: String,
        /// Display form of the failure.
        reason: String,
        /// Number of comments collected before the failure.
        count: usize,
    },
}

/// Sequential, throttled comment collector over a [`CommentSource`].
pub struct Collector<S> {
    source: S,
    throttle: FixedDelay,
}

impl<S: CommentSource> Collector<S> {
    /// Creates a collector with the default ~100 ms inter-fetch delay.
    pub fn new(source: S) -> Self {
        Self::with_throttle(source, FixedDelay::default())
    }

    /// Creates a collector with an explicit throttle.
    pub fn with_throttle(source: S, throttle: FixedDelay) -> Self {
        Self { source, throttle }
    }

    /// Collects every available page of comments for one identifier.
    ///
    /// Follows continuation tokens until the source returns none. On any
    /// failure the outcome keeps the comments collected so far and records
    /// the error; there is no retry.
    pub async fn fetch_all(&self, video_id: &str) -> FetchOutcome {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            match self.source.comment_page(video_id, page_token.as_deref()).await {
                Ok(page) => {
                    comments.extend(page.comments);
                    match page.next_page_token {
                        Some(token) => page_token = Some(token),
                        None => break,
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        video_id,
                        kept = comments.len(),
                        "comment collection stopped: {err}"
                    );
                    return FetchOutcome { comments, error: Some(err) };
                }
            }
        }

        FetchOutcome { comments, error: None }
    }

    /// Collects comments for every entry, sequentially, in input order.
    ///
    /// Invalid entries are reported through `progress` and never reach the
    /// source. A fixed pause is inserted between successive network
    /// fetches; this is a deliberate throttling policy, not a missed
    /// optimization, so callers must not parallelize around it.
    pub async fn fetch_many(
        &self,
        entries: &[UrlEntry],
        mut progress: impl FnMut(CollectProgress),
    ) -> FetchReport {
        let mut report = FetchReport::default();
        let mut fetched_any = false;

        for entry in entries {
            let url = entry.url.clone();
            match entry.video_id.as_deref() {
                None => {
                    progress(CollectProgress::Invalid { url: url.clone() });
                    report.entries.push(UrlReport { url, result: UrlResult::Invalid });
                }
                Some(video_id) => {
                    if fetched_any {
                        self.throttle.pause().await;
                    }
                    fetched_any = true;

                    progress(CollectProgress::Started { url: url.clone() });
                    let outcome = self.fetch_all(video_id).await;
                    progress(match &outcome.error {
                        None => CollectProgress::Finished {
                            url: url.clone(),
                            count: outcome.comments.len(),
                        },
                        Some(err) => CollectProgress::Failed {
                            url: url.clone(),
                            reason: err.to_string(),
                            count: outcome.comments.len(),
                        },
                    });
                    report
                        .entries
                        .push(UrlReport { url, result: UrlResult::Fetched(outcome) });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;

    /// Scripted source: a queue of per-call results plus a call log.
    struct ScriptedSource {
        pages: Mutex<Vec<Result<CommentPage, CollectError>>>,
        calls: Mutex<Vec<(String, Option<String>)>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<CommentPage, CollectError>>) -> Self {
            Self { pages: Mutex::new(pages), calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<(String, Option<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommentSource for ScriptedSource {
        async fn comment_page(
            &self,
            video_id: &str,
            page_token: Option<&str>,
        ) -> Result<CommentPage, CollectError> {
            self.calls
                .lock()
                .unwrap()
                .push((video_id.to_owned(), page_token.map(str::to_owned)));
            self.pages.lock().unwrap().remove(0)
        }
    }

    fn page(comments: &[&str], next: Option<&str>) -> Result<CommentPage, CollectError> {
        Ok(CommentPage {
            comments: comments.iter().map(|c| (*c).to_owned()).collect(),
            next_page_token: next.map(str::to_owned),
        })
    }

    fn api_error() -> Result<CommentPage, CollectError> {
        Err(CollectError::Api { status: 403, message: "quota exceeded".to_owned() })
    }

    fn entry(url: &str, id: Option<&str>) -> UrlEntry {
        UrlEntry { url: url.to_owned(), video_id: id.map(str::to_owned) }
    }

    #[tokio::test]
    async fn fetch_all_follows_continuation_tokens() {
        let source = ScriptedSource::new(vec![
            page(&["one", "two"], Some("tok-2")),
            page(&["three"], Some("tok-3")),
            page(&[], None),
        ]);
        let collector = Collector::with_throttle(source, FixedDelay::none());

        let outcome = collector.fetch_all("vid-a").await;
        assert!(outcome.error.is_none());
        assert_eq!(outcome.comments, vec!["one", "two", "three"]);
        assert_eq!(
            collector.source.calls(),
            vec![
                ("vid-a".to_owned(), None),
                ("vid-a".to_owned(), Some("tok-2".to_owned())),
                ("vid-a".to_owned(), Some("tok-3".to_owned())),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_all_keeps_partial_comments_on_failure() {
        let source =
            ScriptedSource::new(vec![page(&["kept"], Some("tok-2")), api_error()]);
        let collector = Collector::with_throttle(source, FixedDelay::none());

        let outcome = collector.fetch_all("vid-a").await;
        assert_eq!(outcome.comments, vec!["kept"]);
        assert!(matches!(outcome.error, Some(CollectError::Api { status: 403, .. })));
    }

    #[tokio::test]
    async fn fetch_many_skips_invalid_and_isolates_failures() {
        // Video A fails after one page; video B succeeds fully.
        let source = ScriptedSource::new(vec![
            page(&["a1"], Some("tok")),
            api_error(),
            page(&["b1", "b2"], None),
        ]);
        let collector = Collector::with_throttle(source, FixedDelay::none());
        let entries = vec![
            entry("https://youtu.be/aaa", Some("aaa")),
            entry("notaurl", None),
            entry("https://youtu.be/bbb", Some("bbb")),
        ];

        let mut events = Vec::new();
        let report = collector.fetch_many(&entries, |p| events.push(p)).await;

        // The invalid entry never reached the source.
        let called_ids: Vec<String> =
            collector.source.calls().into_iter().map(|(id, _)| id).collect();
        assert_eq!(called_ids, vec!["aaa", "aaa", "bbb"]);

        assert_eq!(report.entries.len(), 3);
        match &report.entries[0].result {
            UrlResult::Fetched(outcome) => {
                assert_eq!(outcome.comments, vec!["a1"]);
                assert!(outcome.error.is_some());
            }
            other => panic!("expected partial fetch, got {other:?}"),
        }
        assert!(matches!(report.entries[1].result, UrlResult::Invalid));
        match &report.entries[2].result {
            UrlResult::Fetched(outcome) => {
                assert_eq!(outcome.comments, vec!["b1", "b2"]);
                assert!(outcome.error.is_none());
            }
            other => panic!("expected full fetch, got {other:?}"),
        }

        // Progress sequence mirrors input order.
        let kinds: Vec<&str> = events
            .iter()
            .map(|e| match e {
                CollectProgress::Started { .. } => "started",
                CollectProgress::Invalid { .. } => "invalid",
                CollectProgress::Finished { .. } => "finished",
                CollectProgress::Failed { .. } => "failed",
            })
            .collect();
        assert_eq!(kinds, vec!["started", "failed", "invalid", "started", "finished"]);
    }

    #[tokio::test]
    async fn fetch_many_reports_empty_results_as_finished_zero() {
        let source = ScriptedSource::new(vec![page(&[], None)]);
        let collector = Collector::with_throttle(source, FixedDelay::none());
        let entries = vec![entry("https://youtu.be/empty", Some("empty"))];

        let mut events = Vec::new();
        let report = collector.fetch_many(&entries, |p| events.push(p)).await;

        match &report.entries[0].result {
            UrlResult::Fetched(outcome) => {
                assert!(outcome.comments.is_empty());
                assert!(outcome.error.is_none());
            }
            other => panic!("expected empty fetch, got {other:?}"),
        }
        assert!(
            matches!(&events[1], CollectProgress::Finished { count: 0, .. }),
            "zero comments is a finished outcome, not a failure"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_many_pauses_between_network_fetches() {
        let source = ScriptedSource::new(vec![
            page(&["a"], None),
            page(&["b"], None),
            page(&["c"], None),
        ]);
        let collector =
            Collector::with_throttle(source, FixedDelay::new(Duration::from_millis(100)));
        let entries = vec![
            entry("u1", Some("v1")),
            entry("bad", None),
            entry("u2", Some("v2")),
            entry("u3", Some("v3")),
        ];

        let start = tokio::time::Instant::now();
        collector.fetch_many(&entries, |_| {}).await;

        // Two pauses: before the second and third network fetches. The
        // invalid entry does not consume a pause slot.
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }
}
