//! Lawyer directory source port

use async_trait::async_trait;
use compass_domain::LawyerRecord;
use thiserror::Error;

/// Errors that can occur while loading the directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of the full lawyer record set
///
/// Loaded once at startup. A failing source degrades the overlay to an
/// empty record set; it never blocks the chat.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn load(&self) -> Result<Vec<LawyerRecord>, DirectoryError>;
}
