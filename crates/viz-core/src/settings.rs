use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Chat-log frequency and sentiment visualizer
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chat-viz",
    about = "Parse a chat export and render frequency/sentiment charts",
    version
)]
pub struct Settings {
    /// Chat export file to read
    #[arg(default_value = "whatsapp.txt")]
    pub input: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Also render per-sender sentiment charts
    #[arg(long)]
    pub sentiment: bool,

    /// Export the parsed records to this CSV file (comma-separated, no header)
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Settings::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["chat-viz"]).unwrap();
        assert_eq!(settings.input, PathBuf::from("whatsapp.txt"));
        assert_eq!(settings.out_dir, PathBuf::from("."));
        assert!(!settings.sentiment);
        assert!(settings.csv_out.is_none());
        assert_eq!(settings.log_level, "INFO");
    }

    #[test]
    fn test_positional_input_override() {
        let settings = Settings::try_parse_from(["chat-viz", "group.txt"]).unwrap();
        assert_eq!(settings.input, PathBuf::from("group.txt"));
    }

    #[test]
    fn test_flags() {
        let settings = Settings::try_parse_from([
            "chat-viz",
            "chat.txt",
            "--sentiment",
            "--csv-out",
            "records.csv",
            "--out-dir",
            "charts",
        ])
        .unwrap();
        assert!(settings.sentiment);
        assert_eq!(settings.csv_out, Some(PathBuf::from("records.csv")));
        assert_eq!(settings.out_dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Settings::try_parse_from(["chat-viz", "--log-level", "LOUD"]);
        assert!(result.is_err());
    }
}
