//! CSV lawyer directory source.
//!
//! Fetches the static directory asset over HTTP once at startup and parses
//! it with a header-aware reader. Numeric columns are coerced cell by cell
//! with a `parse-or-NaN` rule: a malformed rating or coordinate marks that
//! field `NaN` instead of rejecting the row, and downstream consumers guard
//! on [`LawyerRecord::has_coordinates`] before mapping.

use async_trait::async_trait;
use compass_application::{DirectoryError, DirectorySource};
use compass_domain::LawyerRecord;
use serde::Deserialize;
use tracing::debug;

/// Raw CSV row: every column arrives as text.
///
/// All fields default so short or partially filled rows still parse;
/// unknown columns are ignored by the reader.
#[derive(Debug, Default, Deserialize)]
struct RawRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    specialization: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    latitude: String,
    #[serde(default)]
    longitude: String,
    #[serde(default)]
    website: String,
    #[serde(default)]
    education: String,
    #[serde(default)]
    awards: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    profile_url: String,
}

fn coerce(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

impl From<RawRow> for LawyerRecord {
    fn from(row: RawRow) -> Self {
        LawyerRecord {
            rating: coerce(&row.rating),
            latitude: coerce(&row.latitude),
            longitude: coerce(&row.longitude),
            id: row.id,
            name: row.name,
            specialization: row.specialization,
            address: row.address,
            phone: row.phone,
            website: row.website,
            education: row.education,
            awards: row.awards,
            category: row.category,
            profile_url: row.profile_url,
        }
    }
}

/// Parse directory CSV text. A header row is required.
pub fn parse_directory(text: &str) -> Result<Vec<LawyerRecord>, DirectoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|e| DirectoryError::Parse(e.to_string()))?;
        records.push(LawyerRecord::from(row));
    }

    debug!("Parsed {} directory rows", records.len());
    Ok(records)
}

/// Directory source backed by the statically hosted CSV asset.
pub struct HttpDirectorySource {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectorySource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn load(&self) -> Result<Vec<LawyerRecord>, DirectoryError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Fetch(format!(
                "status {}",
                status.as_u16()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        parse_directory(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "id,name,specialization,address,phone,rating,latitude,longitude,website,education,awards,category,profile_url";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n\
             1,Dana Roe,Estate Planning,12 Main St,555-0100,4.5,34.0522,-118.2437,https://roe.example,UCLA,Best of 2020,\"Wills, Trusts & Estates\",https://dir.example/1\n\
             2,Sam Lee,Probate,34 Oak Ave,555-0101,3.9,33.9,-118.1,,,,Probate,https://dir.example/2\n"
        );

        let records = parse_directory(&csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].name, "Dana Roe");
        assert_eq!(records[0].rating, 4.5);
        assert_eq!(records[0].category, "Wills, Trusts & Estates");
        assert!(records[0].has_coordinates());
        assert!(records[1].website.is_empty());
    }

    #[test]
    fn malformed_numbers_become_nan_without_error() {
        let csv = format!(
            "{HEADER}\n\
             3,Pat Kim,Trusts,56 Elm St,555-0102,not-a-number,abc,-118.2,,,,Trusts,\n"
        );

        let records = parse_directory(&csv).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].rating.is_nan());
        assert!(records[0].latitude.is_nan());
        assert_eq!(records[0].longitude, -118.2);
        assert!(!records[0].has_coordinates());
    }

    #[test]
    fn empty_cells_become_nan() {
        let csv = format!("{HEADER}\n4,Lee Cruz,Wills,,,,,,,,,,\n");

        let records = parse_directory(&csv).unwrap();
        assert!(records[0].latitude.is_nan());
        assert!(records[0].longitude.is_nan());
    }

    #[test]
    fn header_only_yields_empty_set() {
        let records = parse_directory(&format!("{HEADER}\n")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn short_rows_are_tolerated() {
        let csv = format!("{HEADER}\n5,Ana Diaz\n");

        let records = parse_directory(&csv).unwrap();
        assert_eq!(records[0].name, "Ana Diaz");
        assert!(records[0].latitude.is_nan());
    }
}
