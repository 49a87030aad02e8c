//! Assistant gateway port
//!
//! Defines the interface for communicating with the remote legal-assistance
//! backend: question answering and PDF ingestion. The backend is an opaque
//! collaborator; no retries, timeouts, or cancellation are layered on top.

use async_trait::async_trait;
use compass_domain::{LawyerRecord, Question};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// Every variant is normalized into a single user-visible chat message at
/// the use-case layer; none escapes further.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Gateway returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// A decoded answer from the gateway.
#[derive(Debug, Clone, Default)]
pub struct AskReply {
    /// Answer text; adapters substitute a fallback when the backend sends
    /// an empty reply.
    pub answer: String,
    /// Provenance tag for the answer.
    pub source: Option<String>,
    /// Supporting source snippets, when the backend provides them.
    pub sources: Vec<String>,
    /// Recommended lawyers matching the question.
    pub recommendations: Vec<LawyerRecord>,
}

/// A PDF document staged for ingestion.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PdfDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Receipt returned by the ingestion endpoints.
#[derive(Debug, Clone, Default)]
pub struct IngestReceipt {
    /// Chunk count reported for a single-document ingestion.
    pub chunks_processed: Option<u64>,
    /// Status line reported for a batch ingestion.
    pub message: Option<String>,
}

/// Gateway for the legal-assistance backend
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Ask a question and decode the answer.
    async fn ask(&self, question: &Question) -> Result<AskReply, GatewayError>;

    /// Submit a single PDF for ingestion.
    async fn process_pdf(&self, document: PdfDocument) -> Result<IngestReceipt, GatewayError>;

    /// Submit several PDFs for ingestion in one request.
    async fn process_batch(
        &self,
        documents: Vec<PdfDocument>,
    ) -> Result<IngestReceipt, GatewayError>;
}
