//! Raw TOML configuration data types
//!
//! These structs mirror the structure of the config file exactly. Every
//! section and field defaults, so a missing file, a partial file, and a
//! full file all deserialize the same way.

mod api;
mod directory;
mod map;
mod repl;

pub use api::FileApiConfig;
pub use directory::FileDirectoryConfig;
pub use map::FileMapConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Assistant gateway settings
    pub api: FileApiConfig,
    /// Lawyer directory asset settings
    pub directory: FileDirectoryConfig,
    /// Map provider settings
    pub map: FileMapConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Resolve the directory asset URL.
    ///
    /// An explicit `[directory] url` wins; otherwise the well-known asset
    /// path is joined onto the gateway base URL.
    pub fn directory_url(&self) -> String {
        if self.directory.url.trim().is_empty() {
            format!(
                "{}/wills_lawyers.csv",
                self.api.base_url.trim_end_matches('/')
            )
        } else {
            self.directory.url.clone()
        }
    }
}
