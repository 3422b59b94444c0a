//! Message frequency aggregation over time buckets.

use std::collections::BTreeMap;

use viz_core::bucket::{Bucket, BucketKey};
use viz_core::models::{ChatMessage, FrequencyRow};

/// Stateless helper that counts messages per sender per time bucket.
pub struct FrequencyAggregator;

impl FrequencyAggregator {
    /// Count messages per (sender, bucket key).
    ///
    /// Only pairs with at least one message produce a row; zero-count buckets
    /// are never synthesized. Rows come out sorted by sender, then
    /// chronologically by bucket.
    pub fn aggregate(messages: &[ChatMessage], bucket: Bucket) -> Vec<FrequencyRow> {
        // BTreeMap keys keep the output deterministically sorted.
        let mut map: BTreeMap<(String, BucketKey), u32> = BTreeMap::new();

        for message in messages {
            *map.entry((message.sender.clone(), bucket.key_of(message)))
                .or_default() += 1;
        }

        map.into_iter()
            .map(|((sender, key), count)| FrequencyRow {
                bucket: key,
                sender,
                count,
            })
            .collect()
    }

    /// Sum of all row counts attributed to `sender`.
    pub fn total_for_sender(rows: &[FrequencyRow], sender: &str) -> u64 {
        rows.iter()
            .filter(|row| row.sender == sender)
            .map(|row| u64::from(row.count))
            .sum()
    }

    /// Unique senders present in `rows`, in row order.
    pub fn senders(rows: &[FrequencyRow]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for row in rows {
            if !seen.contains(&row.sender) {
                seen.push(row.sender.clone());
            }
        }
        seen
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_message(date: (i32, u32, u32), time: (u32, u32), sender: &str) -> ChatMessage {
        ChatMessage {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            sender: sender.to_string(),
            text: "hello".to_string(),
        }
    }

    // ── aggregate by date ─────────────────────────────────────────────────────

    #[test]
    fn test_aggregate_by_date_groups_and_counts() {
        let messages = vec![
            make_message((2021, 3, 1), (8, 0), "Alice"),
            make_message((2021, 3, 1), (20, 0), "Alice"),
            make_message((2021, 3, 2), (10, 0), "Alice"),
            make_message((2021, 3, 1), (9, 0), "Bob"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByDate);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].sender, "Alice");
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].sender, "Alice");
        assert_eq!(rows[1].count, 1);
        assert_eq!(rows[2].sender, "Bob");
        assert_eq!(rows[2].count, 1);
    }

    #[test]
    fn test_aggregate_by_time_merges_across_days() {
        // Same time of day on different dates lands in one bucket.
        let messages = vec![
            make_message((2021, 3, 1), (14, 5), "Alice"),
            make_message((2021, 3, 2), (14, 5), "Alice"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByTime);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 2);
        assert_eq!(
            rows[0].bucket,
            BucketKey::Time(NaiveTime::from_hms_opt(14, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_aggregate_empty_input() {
        let rows = FrequencyAggregator::aggregate(&[], Bucket::ByDate);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_aggregate_never_emits_zero_counts() {
        let messages = vec![
            make_message((2021, 3, 1), (8, 0), "Alice"),
            make_message((2021, 3, 5), (8, 0), "Bob"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByDate);

        // No row is synthesized for Alice on 3/5 or Bob on 3/1.
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.count > 0));
    }

    #[test]
    fn test_aggregate_rows_sorted_chronologically_per_sender() {
        let messages = vec![
            make_message((2021, 3, 9), (8, 0), "Alice"),
            make_message((2021, 3, 1), (8, 0), "Alice"),
            make_message((2021, 3, 5), (8, 0), "Alice"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByDate);

        let coords: Vec<f64> = rows.iter().map(|r| r.bucket.coord()).collect();
        let mut sorted = coords.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(coords, sorted);
    }

    // ── totals ────────────────────────────────────────────────────────────────

    #[test]
    fn test_total_for_sender_matches_message_count() {
        let messages = vec![
            make_message((2021, 3, 1), (8, 0), "Alice"),
            make_message((2021, 3, 2), (9, 0), "Alice"),
            make_message((2021, 3, 3), (10, 0), "Alice"),
            make_message((2021, 3, 1), (8, 0), "Bob"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByDate);

        assert_eq!(FrequencyAggregator::total_for_sender(&rows, "Alice"), 3);
        assert_eq!(FrequencyAggregator::total_for_sender(&rows, "Bob"), 1);
        assert_eq!(FrequencyAggregator::total_for_sender(&rows, "Carol"), 0);
    }

    #[test]
    fn test_senders_in_row_order() {
        let messages = vec![
            make_message((2021, 3, 1), (8, 0), "Bob"),
            make_message((2021, 3, 1), (9, 0), "Alice"),
        ];
        let rows = FrequencyAggregator::aggregate(&messages, Bucket::ByDate);
        // Rows are sorted by sender, so Alice comes first.
        assert_eq!(FrequencyAggregator::senders(&rows), vec!["Alice", "Bob"]);
    }
}
