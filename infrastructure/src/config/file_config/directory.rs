//! `[directory]` section

use serde::{Deserialize, Serialize};

/// Lawyer directory asset settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDirectoryConfig {
    /// Directory CSV location. Empty means the well-known asset path on
    /// the gateway host (`{api.base_url}/wills_lawyers.csv`).
    pub url: String,
}
