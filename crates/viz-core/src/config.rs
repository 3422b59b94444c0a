use std::path::PathBuf;

/// Run configuration shared by the parsing pipeline.
///
/// Holds the input path and the fixed participant set for the duration of a
/// run. Constructed once in `main` and passed by reference into each
/// component rather than living in process-wide state.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Path of the chat export file being processed.
    pub input: PathBuf,
    /// Every known sender name; messages from anyone else are dropped.
    pub participants: Vec<String>,
}

impl ChatConfig {
    pub fn new(input: impl Into<PathBuf>, participants: Vec<String>) -> Self {
        Self {
            input: input.into(),
            participants,
        }
    }
}
