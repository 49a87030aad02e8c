//! `[repl]` section

use serde::{Deserialize, Serialize};

/// REPL settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Persist readline history under the platform data directory.
    pub history: bool,
    /// Write a JSONL transcript of each chat session.
    pub transcript: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history: true,
            transcript: false,
        }
    }
}
