//! reqwest adapter for the assistant gateway.
//!
//! One HTTP call per operation, no retries, no timeout beyond what the
//! caller's client carries. Transport errors, non-2xx statuses, and
//! undecodable bodies are normalized into [`GatewayError`] here so the
//! use-case layer can fold them into a single chat message.

use crate::gateway::protocol::{
    AskRequest, AskResponse, ErrorBody, ProcessBatchResponse, ProcessPdfResponse,
};
use async_trait::async_trait;
use compass_application::{AskReply, AssistantGateway, GatewayError, IngestReceipt, PdfDocument};
use compass_domain::Question;
use reqwest::multipart;
use tracing::debug;

/// Default backend address, matching the development gateway.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Assistant gateway backed by the remote HTTP API.
pub struct HttpAssistantGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssistantGateway {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-2xx reply to [`GatewayError::Status`], using the backend's
    /// own `error` field when the body is decodable.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        Err(GatewayError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn pdf_part(document: PdfDocument) -> Result<multipart::Part, GatewayError> {
        multipart::Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str("application/pdf")
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl AssistantGateway for HttpAssistantGateway {
    async fn ask(&self, question: &Question) -> Result<AskReply, GatewayError> {
        debug!("POST /ask ({} bytes)", question.content().len());

        let response = self
            .client
            .post(self.endpoint("/ask"))
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(body.into())
    }

    async fn process_pdf(&self, document: PdfDocument) -> Result<IngestReceipt, GatewayError> {
        debug!("POST /process-pdf ({})", document.file_name);

        let form = multipart::Form::new().part("pdf", Self::pdf_part(document)?);
        let response = self
            .client
            .post(self.endpoint("/process-pdf"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body: ProcessPdfResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        body.into_receipt()
    }

    async fn process_batch(
        &self,
        documents: Vec<PdfDocument>,
    ) -> Result<IngestReceipt, GatewayError> {
        debug!("POST /process ({} documents)", documents.len());

        let mut form = multipart::Form::new();
        for document in documents {
            form = form.part("pdfs", Self::pdf_part(document)?);
        }

        let response = self
            .client
            .post(self.endpoint("/process"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let body: ProcessBatchResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Ok(body.into())
    }
}
