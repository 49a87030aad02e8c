//! Wire types for the assistant gateway.
//!
//! The backend has shipped two front-end contracts with divergent field
//! names; this module pins the canonical one. Answers arrive in `response`
//! (`answer` is accepted as an alias), single-file ingestion replies carry
//! `status` / `chunks_processed` / `error`, batch ingestion replies carry
//! `message`. Unknown fields are ignored.

use compass_application::{AskReply, GatewayError, IngestReceipt};
use compass_domain::LawyerRecord;
use serde::{Deserialize, Serialize};

/// Text substituted when the backend answers without an answer field.
pub const EMPTY_ANSWER_TEXT: &str = "No answer available";

/// Body of `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Reply of `POST /ask`.
#[derive(Debug, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default, alias = "answer")]
    pub response: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub lawyer_recommendation: Vec<LawyerRecommendation>,
}

impl From<AskResponse> for AskReply {
    fn from(body: AskResponse) -> Self {
        AskReply {
            answer: body
                .response
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| EMPTY_ANSWER_TEXT.to_string()),
            source: body.source,
            sources: body.sources,
            recommendations: body
                .lawyer_recommendation
                .into_iter()
                .map(LawyerRecord::from)
                .collect(),
        }
    }
}

/// A recommended lawyer as the backend sends it.
///
/// Recommendation entries are not guaranteed to carry the full directory
/// row, so every field defaults; absent coordinates become `NaN` rather
/// than a fake location.
#[derive(Debug, Deserialize)]
pub struct LawyerRecommendation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "nan")]
    pub rating: f64,
    #[serde(default = "nan")]
    pub latitude: f64,
    #[serde(default = "nan")]
    pub longitude: f64,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub awards: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub profile_url: String,
}

fn nan() -> f64 {
    f64::NAN
}

impl From<LawyerRecommendation> for LawyerRecord {
    fn from(dto: LawyerRecommendation) -> Self {
        LawyerRecord {
            id: dto.id,
            name: dto.name,
            specialization: dto.specialization,
            address: dto.address,
            phone: dto.phone,
            rating: dto.rating,
            latitude: dto.latitude,
            longitude: dto.longitude,
            website: dto.website,
            education: dto.education,
            awards: dto.awards,
            category: dto.category,
            profile_url: dto.profile_url,
        }
    }
}

/// Reply of `POST /process-pdf`.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessPdfResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub chunks_processed: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProcessPdfResponse {
    /// A 2xx reply still fails when the backend reports a non-success
    /// status in the body.
    pub fn into_receipt(self) -> Result<IngestReceipt, GatewayError> {
        if self.status == "success" {
            Ok(IngestReceipt {
                chunks_processed: self.chunks_processed,
                message: None,
            })
        } else {
            Err(GatewayError::RequestFailed(
                self.error.unwrap_or_else(|| "Processing failed".to_string()),
            ))
        }
    }
}

/// Reply of `POST /process`.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessBatchResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ProcessBatchResponse> for IngestReceipt {
    fn from(body: ProcessBatchResponse) -> Self {
        IngestReceipt {
            chunks_processed: None,
            message: body.message,
        }
    }
}

/// Error body the backend attaches to non-2xx replies.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_response_field() {
        let body: AskResponse =
            serde_json::from_str(r#"{"response": "A will is...", "source": "docs"}"#).unwrap();
        let reply = AskReply::from(body);
        assert_eq!(reply.answer, "A will is...");
        assert_eq!(reply.source.as_deref(), Some("docs"));
    }

    #[test]
    fn decode_answer_alias() {
        let body: AskResponse =
            serde_json::from_str(r#"{"answer": "Probate is...", "chat_history": []}"#).unwrap();
        let reply = AskReply::from(body);
        assert_eq!(reply.answer, "Probate is...");
    }

    #[test]
    fn missing_answer_falls_back() {
        let body: AskResponse = serde_json::from_str(r#"{"sources": ["s1"]}"#).unwrap();
        let reply = AskReply::from(body);
        assert_eq!(reply.answer, EMPTY_ANSWER_TEXT);
        assert_eq!(reply.sources, vec!["s1".to_string()]);
    }

    #[test]
    fn partial_recommendation_gets_nan_coordinates() {
        let body: AskResponse = serde_json::from_str(
            r#"{"response": "ok", "lawyer_recommendation": [{"name": "Dana Roe", "specialization": "Estates"}]}"#,
        )
        .unwrap();
        let reply = AskReply::from(body);
        assert_eq!(reply.recommendations.len(), 1);
        let rec = &reply.recommendations[0];
        assert_eq!(rec.name, "Dana Roe");
        assert!(rec.latitude.is_nan());
        assert!(!rec.has_coordinates());
    }

    #[test]
    fn full_recommendation_round_trips_into_record() {
        let body: AskResponse = serde_json::from_str(
            r#"{"response": "ok", "lawyer_recommendation": [{
                "id": "42", "name": "Dana Roe", "latitude": 34.1, "longitude": -118.3,
                "rating": 4.5, "category": "Wills, Trusts & Estates"
            }]}"#,
        )
        .unwrap();
        let rec = &AskReply::from(body).recommendations[0];
        assert_eq!(rec.id, "42");
        assert!(rec.has_coordinates());
        assert_eq!(rec.rating, 4.5);
    }

    #[test]
    fn pdf_success_becomes_receipt() {
        let body: ProcessPdfResponse =
            serde_json::from_str(r#"{"status": "success", "chunks_processed": 3}"#).unwrap();
        let receipt = body.into_receipt().unwrap();
        assert_eq!(receipt.chunks_processed, Some(3));
    }

    #[test]
    fn pdf_backend_failure_is_an_error() {
        let body: ProcessPdfResponse =
            serde_json::from_str(r#"{"status": "failed", "error": "no text layer"}"#).unwrap();
        let err = body.into_receipt().unwrap_err();
        assert!(err.to_string().contains("no text layer"));
    }

    #[test]
    fn batch_reply_keeps_backend_message() {
        let body: ProcessBatchResponse = serde_json::from_str(
            r#"{"message": "PDF processed and conversation chain created successfully."}"#,
        )
        .unwrap();
        let receipt = IngestReceipt::from(body);
        assert!(receipt.message.unwrap().contains("successfully"));
    }
}
