use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::bucket::BucketKey;

/// Text a chat export substitutes for an attached image, video or audio clip.
///
/// Messages consisting solely of this text carry no scorable language and are
/// skipped by the sentiment pipeline; they still count towards frequency.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// A single chat message parsed from one line of the export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Calendar date the message was sent.
    pub date: NaiveDate,
    /// Time of day the message was sent, normalized to 24-hour form.
    pub time: NaiveTime,
    /// Name of the participant who sent the message.
    pub sender: String,
    /// Free-form message body.
    pub text: String,
}

impl ChatMessage {
    /// `true` when the message body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.text.trim() == MEDIA_PLACEHOLDER
    }
}

/// Message count for one (sender, bucket) pair.
///
/// Derived and recomputed per invocation; pairs with zero messages are never
/// emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    /// The bucket value the messages fall in.
    pub bucket: BucketKey,
    /// Sender the count is attributed to.
    pub sender: String,
    /// Number of messages from this sender in this bucket.
    pub count: u32,
}

/// Mean sentiment score for one (sender, bucket) pair.
///
/// Present only when the pair has at least one scorable message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRow {
    /// The bucket value the messages fall in.
    pub bucket: BucketKey,
    /// Sender the score is attributed to.
    pub sender: String,
    /// Mean compound score over the pair's messages, in [-1.0, 1.0].
    pub mean_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> ChatMessage {
        ChatMessage {
            date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
            sender: "Alice".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_is_media_exact_placeholder() {
        assert!(message("<Media omitted>").is_media());
    }

    #[test]
    fn test_is_media_with_surrounding_whitespace() {
        assert!(message(" <Media omitted> ").is_media());
    }

    #[test]
    fn test_is_media_false_for_regular_text() {
        assert!(!message("hello there").is_media());
        assert!(!message("sent you a <Media omitted> earlier").is_media());
    }
}
