//! Core library for vidmood.
//!
//! Everything that does not touch a terminal lives here: URL-to-video-id
//! extraction (`extract`), paginated comment collection against the YouTube
//! Data API v3 (`youtube`, `collect`), the fixed-delay throttle between
//! requests (`throttle`), and lexicon-based sentiment classification
//! (`sentiment`). The `vidmood` binary drives these from its event loop.
//!
//! The two external collaborators are kept behind trait seams so tests can
//! script them: [`collect::CommentSource`] for the comment-listing service
//! and [`sentiment::PolarityScorer`] for the lexicon scorer.

pub mod collect;
pub mod error;
pub mod extract;
pub mod sentiment;
pub mod throttle;
pub mod types;
pub mod youtube;
