//! Chat export parsing.
//!
//! Detects the participant set from a raw export, then extracts structured
//! [`ChatMessage`] records by matching every line of the form
//! `date, time - sender: message` (optionally with an AM/PM marker).
//! Lines that do not match, including continuations of multi-line messages,
//! are silently dropped; a diagnostic count is logged at debug level.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use tracing::debug;
use viz_core::config::ChatConfig;
use viz_core::error::{Result, VizError};
use viz_core::models::ChatMessage;
use viz_core::time_utils;

// ── Participant detection ─────────────────────────────────────────────────────

/// Scan `text` for sender names and return them deduplicated and sorted.
///
/// A sender name is whatever sits between the `time - ` prefix and the first
/// `: ` on a message line. Fails with [`VizError::NoParticipants`] when no
/// line matches, which also catches files in an unexpected format.
pub fn detect_participants(text: &str, path: &Path) -> Result<Vec<String>> {
    let re = Regex::new(r"\d{1,2}:\d{2}(?:\s?[AaPp][Mm])?\s-\s(.+?):\s").expect("regex is valid");

    let names: BTreeSet<String> = re
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();

    if names.is_empty() {
        return Err(VizError::NoParticipants(path.to_path_buf()));
    }

    Ok(names.into_iter().collect())
}

// ── Message extraction ────────────────────────────────────────────────────────

/// Extract every well-formed message line sent by a known participant.
///
/// The line pattern is built from the escaped participant names so only
/// senders in the config's set can produce records. 12-hour times are
/// normalized to 24-hour form using the captured AM/PM marker before the
/// record is built. Pure function of (text, participants).
pub fn parse_messages(text: &str, config: &ChatConfig) -> Result<Vec<ChatMessage>> {
    let alternation: Vec<String> = config
        .participants
        .iter()
        .map(|name| regex::escape(name))
        .collect();
    let pattern = format!(
        r"(\d{{1,2}}/\d{{1,2}}/\d{{2,4}}), (\d{{1,2}}:\d{{2}})(?:\s?([AaPp][Mm]))?\s-\s({}):\s(.*)",
        alternation.join("|")
    );
    let re = Regex::new(&pattern)?;

    let mut messages: Vec<ChatMessage> = Vec::new();
    for caps in re.captures_iter(text) {
        let Some(date) = time_utils::parse_date(&caps[1]) else {
            continue;
        };
        let meridiem = caps.get(3).map(|m| m.as_str());
        let Some(time) = time_utils::parse_time(&caps[2], meridiem) else {
            continue;
        };

        messages.push(ChatMessage {
            date,
            time,
            sender: caps[4].to_string(),
            text: caps[5].to_string(),
        });
    }

    let lines_total = text.lines().filter(|l| !l.trim().is_empty()).count();
    debug!(
        "{} non-empty lines, {} records matched, {} dropped",
        lines_total,
        messages.len(),
        lines_total.saturating_sub(messages.len()),
    );

    Ok(messages)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
