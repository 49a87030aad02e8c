//! Upload document use case.
//!
//! Submits one PDF (or a batch) to the ingestion endpoint and reports the
//! outcome as a system message. The `uploading` flag is set around the
//! request and cleared on every exit path; there is no partial-success
//! handling for batches.

use crate::ports::assistant_gateway::{AssistantGateway, PdfDocument};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use compass_domain::{ChatSession, Message};
use std::sync::Arc;
use tracing::{info, warn};

/// System text shown for any failed ingestion, whatever the cause.
pub const UPLOAD_ERROR_TEXT: &str = "PDF processing failed";

/// Use case for submitting PDFs to the ingestion endpoints.
pub struct UploadDocumentUseCase {
    gateway: Arc<dyn AssistantGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl UploadDocumentUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Submit a single PDF for ingestion.
    pub async fn execute(&self, session: &mut ChatSession, document: PdfDocument) {
        let file_name = document.file_name.clone();
        session.begin_upload();

        match self.gateway.process_pdf(document).await {
            Ok(receipt) => {
                let chunks = receipt.chunks_processed.unwrap_or(0);
                info!("Ingested {} ({} chunks)", file_name, chunks);
                self.conversation_logger.log(ConversationEvent::new(
                    "pdf_ingested",
                    serde_json::json!({
                        "file": file_name,
                        "chunks_processed": chunks,
                    }),
                ));
                session.push(
                    Message::system(format!("PDF processed successfully ({} chunks)", chunks))
                        .with_source("system"),
                );
            }
            Err(e) => {
                warn!("Ingestion of {} failed: {}", file_name, e);
                self.conversation_logger.log(ConversationEvent::new(
                    "pdf_ingest_failed",
                    serde_json::json!({
                        "file": file_name,
                        "error": e.to_string(),
                    }),
                ));
                session.push(Message::system(UPLOAD_ERROR_TEXT).with_source("error"));
            }
        }

        session.finish_upload();
    }

    /// Submit several PDFs in one batch request.
    ///
    /// An empty batch is a no-op. The backend's own status line becomes the
    /// system message on success.
    pub async fn execute_batch(&self, session: &mut ChatSession, documents: Vec<PdfDocument>) {
        if documents.is_empty() {
            return;
        }

        let count = documents.len();
        session.begin_upload();

        match self.gateway.process_batch(documents).await {
            Ok(receipt) => {
                let text = receipt
                    .message
                    .unwrap_or_else(|| format!("{} PDFs processed", count));
                info!("Batch ingestion of {} documents complete", count);
                self.conversation_logger.log(ConversationEvent::new(
                    "pdf_batch_ingested",
                    serde_json::json!({ "count": count, "message": text }),
                ));
                session.push(Message::system(text).with_source("system"));
            }
            Err(e) => {
                warn!("Batch ingestion failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "pdf_ingest_failed",
                    serde_json::json!({ "count": count, "error": e.to_string() }),
                ));
                session.push(Message::system(UPLOAD_ERROR_TEXT).with_source("error"));
            }
        }

        session.finish_upload();
    }
}
