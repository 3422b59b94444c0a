use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by chat-viz.
#[derive(Error, Debug)]
pub enum VizError {
    /// No participant names could be detected in the input file.
    #[error("No participants detected in {0}")]
    NoParticipants(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The message-line pattern could not be compiled.
    #[error("Failed to build message pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The CSV export failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// A chart could not be drawn or written.
    #[error("Render error: {0}")]
    Render(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the chat-viz crates.
pub type Result<T> = std::result::Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_participants() {
        let err = VizError::NoParticipants(PathBuf::from("whatsapp.txt"));
        assert_eq!(err.to_string(), "No participants detected in whatsapp.txt");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VizError::FileRead {
            path: PathBuf::from("/some/export.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/export.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_render() {
        let err = VizError::Render("backend failure".to_string());
        assert_eq!(err.to_string(), "Render error: backend failure");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VizError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_regex() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err: VizError = regex_err.into();
        assert!(err.to_string().contains("Failed to build message pattern"));
    }
}
