//! Flat CSV export of parsed records.

use std::path::Path;

use tracing::debug;
use viz_core::error::Result;
use viz_core::models::ChatMessage;

/// Write `messages` to `path` as comma-separated rows with no header.
///
/// Columns: date (`m/d/yy`), time (`HH:MM`), sender, text — mirroring the
/// export's own line format so the file round-trips visually. I/O and
/// serialization failures propagate as fatal errors.
pub fn write_csv(messages: &[ChatMessage], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    for message in messages {
        writer.write_record([
            message.date.format("%-m/%-d/%y").to_string(),
            message.time.format("%H:%M").to_string(),
            message.sender.clone(),
            message.text.clone(),
        ])?;
    }

    writer.flush()?;
    debug!("wrote {} records to {}", messages.len(), path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
