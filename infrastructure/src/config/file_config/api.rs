//! `[api]` section

use crate::gateway::http::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Assistant gateway settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the assistant gateway.
    pub base_url: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
