//! Lexicon-based sentiment classification.
//!
//! The scorer itself is an external collaborator (the VADER lexicon via the
//! `vader_sentiment` crate); this module owns only the fixed three-way
//! bucketing and the aggregate summary. Thresholds are not configurable:
//! score > 0.05 is Positive, score < -0.05 is Negative, everything in
//! between (boundaries included) is Neutral.

use crate::types::{SentimentLabel, SentimentRecord, SentimentSummary};

/// External compound polarity scorer.
///
/// Returns a single normalized float in [-1.0, 1.0] for arbitrary text.
/// Production code uses [`VaderScorer`]; tests inject deterministic stubs.
pub trait PolarityScorer {
    /// Scores `text`, returning the compound polarity in [-1.0, 1.0].
    fn compound(&self, text: &str) -> f64;
}

/// The VADER lexicon scorer.
///
/// The underlying lexicon is loaded once per process by the
/// `vader_sentiment` crate; constructing the analyzer per call only borrows
/// it, so this type stays a plain marker with no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Creates the scorer.
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}

/// Buckets a compound score into its sentiment label.
///
/// The partition is exhaustive and exclusive over [-1.0, 1.0]; the boundary
/// values 0.05 and -0.05 both resolve to Neutral.
pub fn label_for(score: f64) -> SentimentLabel {
    if score > 0.05 {
        SentimentLabel::Positive
    } else if score < -0.05 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Classifies each comment into a [`SentimentRecord`].
///
/// Pure function of its input (modulo the scorer's own determinism); the
/// output order matches the input order.
pub fn classify(scorer: &dyn PolarityScorer, comments: &[String]) -> Vec<SentimentRecord> {
    comments
        .iter()
        .map(|text| {
            let score = scorer.compound(text);
            SentimentRecord { text: text.clone(), score, label: label_for(score) }
        })
        .collect()
}

/// Computes per-label counts, the mean score, and the overall label.
///
/// The overall label applies the identical threshold rule to the mean.
/// Empty input yields a mean of 0.0 and therefore an overall of Neutral.
pub fn summarize(records: &[SentimentRecord]) -> SentimentSummary {
    let mut positive = 0;
    let mut negative = 0;
    let mut neutral = 0;
    let mut total = 0.0;

    for record in records {
        match record.label {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
        total += record.score;
    }

    let mean_score = if records.is_empty() { 0.0 } else { total / records.len() as f64 };

    SentimentSummary { positive, negative, neutral, mean_score, overall: label_for(mean_score) }
}
