//! Infrastructure layer for legalcompass
//!
//! Adapters for the application-layer ports: the reqwest HTTP gateway
//! client, the CSV directory source, the static-map provider, TOML/env
//! configuration, and the JSONL transcript logger.

pub mod config;
pub mod directory;
pub mod gateway;
pub mod logging;
pub mod map;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use directory::csv_source::{HttpDirectorySource, parse_directory};
pub use gateway::http::{DEFAULT_BASE_URL, HttpAssistantGateway};
pub use logging::jsonl_logger::TranscriptLogger;
pub use map::static_map::StaticMapProvider;
