//! Load directory use case.
//!
//! One-shot fetch of the lawyer directory at startup. A failing source
//! degrades to an empty record set: the overlay simply shows nothing and
//! chat continues unaffected.

use crate::ports::directory_source::DirectorySource;
use compass_domain::LawyerRecord;
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for loading the full lawyer record set.
pub struct LoadDirectoryUseCase {
    source: Arc<dyn DirectorySource>,
}

impl LoadDirectoryUseCase {
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Vec<LawyerRecord> {
        match self.source.load().await {
            Ok(records) => {
                info!("Loaded {} lawyer records", records.len());
                records
            }
            Err(e) => {
                warn!("Lawyer directory unavailable: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::directory_source::DirectoryError;
    use async_trait::async_trait;

    struct FixedSource(Result<Vec<LawyerRecord>, DirectoryError>);

    #[async_trait]
    impl DirectorySource for FixedSource {
        async fn load(&self) -> Result<Vec<LawyerRecord>, DirectoryError> {
            match &self.0 {
                Ok(records) => Ok(records.clone()),
                Err(DirectoryError::Fetch(msg)) => Err(DirectoryError::Fetch(msg.clone())),
                Err(DirectoryError::Parse(msg)) => Err(DirectoryError::Parse(msg.clone())),
            }
        }
    }

    #[tokio::test]
    async fn test_loaded_records_are_returned() {
        let records = vec![LawyerRecord {
            id: "l1".to_string(),
            ..Default::default()
        }];
        let uc = LoadDirectoryUseCase::new(Arc::new(FixedSource(Ok(records))));

        let loaded = uc.execute().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "l1");
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let uc = LoadDirectoryUseCase::new(Arc::new(FixedSource(Err(DirectoryError::Fetch(
            "404".to_string(),
        )))));

        assert!(uc.execute().await.is_empty());
    }
}
