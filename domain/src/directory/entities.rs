//! Lawyer directory entities

use serde::{Deserialize, Serialize};

/// One row of the lawyer directory (Entity)
///
/// Immutable once parsed; identity is `id`. Numeric fields hold `NaN` when
/// the source value was malformed, so consumers must check
/// [`has_coordinates`](Self::has_coordinates) before placing the record on
/// a map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LawyerRecord {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub website: String,
    pub education: String,
    pub awards: String,
    pub category: String,
    pub profile_url: String,
}

impl LawyerRecord {
    /// Both coordinates parsed to finite numbers.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_coordinates_are_rejected() {
        let record = LawyerRecord {
            latitude: f64::NAN,
            longitude: -118.25,
            ..Default::default()
        };
        assert!(!record.has_coordinates());
    }

    #[test]
    fn test_finite_coordinates_are_accepted() {
        let record = LawyerRecord {
            latitude: 34.05,
            longitude: -118.25,
            ..Default::default()
        };
        assert!(record.has_coordinates());
    }

    #[test]
    fn test_default_record_has_zero_coordinates() {
        // Default is (0.0, 0.0) which is finite. Parse failures must set
        // NaN explicitly, not rely on Default.
        assert!(LawyerRecord::default().has_coordinates());
    }
}
