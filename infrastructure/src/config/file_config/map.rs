//! `[map]` section

use crate::map::static_map::DEFAULT_MAP_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Map provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMapConfig {
    /// Static-map endpoint.
    pub endpoint: String,
    /// Provider credential. Empty leaves the map surface unconfigured and
    /// the overlay shows a placeholder.
    pub api_key: String,
    /// Rendered image width in pixels.
    pub width: u32,
    /// Rendered image height in pixels.
    pub height: u32,
}

impl Default for FileMapConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_MAP_ENDPOINT.to_string(),
            api_key: String::new(),
            width: 640,
            height: 400,
        }
    }
}
