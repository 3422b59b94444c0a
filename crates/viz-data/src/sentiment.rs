//! Per-sender, per-bucket sentiment aggregation.

use std::collections::BTreeMap;

use viz_core::bucket::{Bucket, BucketKey};
use viz_core::models::{ChatMessage, SentimentRow};
use viz_core::sentiment::SentimentAnalyzer;

/// Score messages and average them per (sender, bucket) pair.
///
/// Each message's score is the mean of its sentence scores; the row's
/// `mean_score` is the mean of the pair's message scores. Media-placeholder
/// messages are excluded before scoring, and pairs left with no scorable
/// messages produce no row, so the averaging denominator is never zero.
pub fn aggregate_sentiment(
    messages: &[ChatMessage],
    bucket: Bucket,
    analyzer: &SentimentAnalyzer,
) -> Vec<SentimentRow> {
    let mut map: BTreeMap<(String, BucketKey), Vec<f64>> = BTreeMap::new();

    for message in messages {
        if message.is_media() {
            continue;
        }
        let score = analyzer.score_message(&message.text);
        map.entry((message.sender.clone(), bucket.key_of(message)))
            .or_default()
            .push(score);
    }

    map.into_iter()
        .map(|((sender, key), scores)| SentimentRow {
            bucket: key,
            sender,
            mean_score: scores.iter().sum::<f64>() / scores.len() as f64,
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
