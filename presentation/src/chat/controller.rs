//! Chat controller: explicit command dispatch.
//!
//! The controller is the single composition point: it owns the session,
//! the loaded directory, the overlay, and the sampling RNG, and maps each
//! [`ChatEvent`] to a state transition. Everything user-visible flows
//! through [`handle`](ChatController::handle), so the whole interaction
//! surface is testable without a terminal.

use compass_application::{
    AskQuestionUseCase, MapError, MapScene, MapSurface, PdfDocument, UploadDocumentUseCase,
    use_cases::upload_document::UPLOAD_ERROR_TEXT,
};
use compass_domain::{
    ChatSession, DISPLAY_SAMPLE_SIZE, LawyerRecord, MapViewport, Message, OverlayState,
    display_sample,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// A user interaction, independent of how the terminal captured it.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// Question text submitted.
    Submit(String),
    /// One PDF chosen for ingestion.
    Upload(PathBuf),
    /// Several PDFs chosen for one batch ingestion.
    UploadBatch(Vec<PathBuf>),
    /// Overlay visibility toggled.
    ToggleOverlay,
    /// Marker picked in the overlay.
    SelectMarker(String),
    /// Detail popup dismissed.
    ClosePopup,
}

/// Root controller wiring events to session state transitions.
pub struct ChatController {
    session: ChatSession,
    ask: AskQuestionUseCase,
    upload: UploadDocumentUseCase,
    map: Arc<dyn MapSurface>,
    directory: Vec<LawyerRecord>,
    viewport: MapViewport,
    overlay: Option<OverlayState>,
    selected_document: Option<PathBuf>,
    rng: StdRng,
}

impl ChatController {
    pub fn new(
        ask: AskQuestionUseCase,
        upload: UploadDocumentUseCase,
        map: Arc<dyn MapSurface>,
        directory: Vec<LawyerRecord>,
    ) -> Self {
        Self {
            session: ChatSession::new(),
            ask,
            upload,
            map,
            directory,
            viewport: MapViewport::default(),
            overlay: None,
            selected_document: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the sampling RNG (deterministic tests).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn overlay(&self) -> Option<&OverlayState> {
        self.overlay.as_ref()
    }

    /// Document currently staged in the upload control, if any.
    pub fn selected_document(&self) -> Option<&Path> {
        self.selected_document.as_deref()
    }

    pub fn directory_len(&self) -> usize {
        self.directory.len()
    }

    /// Scene for the open overlay, or None while the overlay is hidden.
    pub fn map_scene(&self) -> Option<Result<MapScene, MapError>> {
        let overlay = self.overlay.as_ref()?;
        Some(self.map.scene(&self.viewport, overlay.lawyers()))
    }

    /// Apply one event to the session state.
    ///
    /// Submit and upload events are ignored while a request is already in
    /// flight; overlay events are always accepted.
    pub async fn handle(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Submit(text) => {
                if self.session.is_busy() {
                    return;
                }
                self.ask.execute(&mut self.session, &text).await;
            }
            ChatEvent::Upload(path) => {
                if self.session.is_busy() {
                    return;
                }
                self.selected_document = Some(path.clone());
                match read_document(&path) {
                    Ok(document) => self.upload.execute(&mut self.session, document).await,
                    Err(e) => {
                        warn!("Could not read {}: {}", path.display(), e);
                        self.session
                            .push(Message::system(UPLOAD_ERROR_TEXT).with_source("error"));
                    }
                }
                // The control resets on every outcome so the same file can
                // be picked again.
                self.selected_document = None;
            }
            ChatEvent::UploadBatch(paths) => {
                if self.session.is_busy() {
                    return;
                }
                let documents: std::io::Result<Vec<PdfDocument>> =
                    paths.iter().map(|p| read_document(p)).collect();
                match documents {
                    Ok(documents) => {
                        self.upload
                            .execute_batch(&mut self.session, documents)
                            .await;
                    }
                    Err(e) => {
                        warn!("Could not read batch: {}", e);
                        self.session
                            .push(Message::system(UPLOAD_ERROR_TEXT).with_source("error"));
                    }
                }
            }
            ChatEvent::ToggleOverlay => {
                if self.overlay.take().is_none() {
                    let sampled =
                        display_sample(&self.directory, DISPLAY_SAMPLE_SIZE, &mut self.rng);
                    self.overlay = Some(OverlayState::open(sampled));
                }
            }
            ChatEvent::SelectMarker(id) => {
                if let Some(overlay) = &mut self.overlay {
                    overlay.select(&id);
                }
            }
            ChatEvent::ClosePopup => {
                if let Some(overlay) = &mut self.overlay {
                    overlay.close_popup();
                }
            }
        }
    }
}

fn read_document(path: &Path) -> std::io::Result<PdfDocument> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    Ok(PdfDocument::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use compass_application::{AskReply, AssistantGateway, GatewayError, IngestReceipt};
    use compass_domain::{Question, Sender};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    enum MockOutcome {
        Ask(Result<AskReply, GatewayError>),
        Ingest(Result<IngestReceipt, GatewayError>),
    }

    struct MockGateway {
        outcomes: Mutex<VecDeque<MockOutcome>>,
    }

    impl MockGateway {
        fn new(outcomes: Vec<MockOutcome>) -> Self {
            Self {
                outcomes: Mutex::new(VecDeque::from(outcomes)),
            }
        }
    }

    #[async_trait]
    impl AssistantGateway for MockGateway {
        async fn ask(&self, _question: &Question) -> Result<AskReply, GatewayError> {
            match self.outcomes.lock().unwrap().pop_front() {
                Some(MockOutcome::Ask(result)) => result,
                _ => Err(GatewayError::RequestFailed("unexpected ask".into())),
            }
        }

        async fn process_pdf(
            &self,
            _document: PdfDocument,
        ) -> Result<IngestReceipt, GatewayError> {
            match self.outcomes.lock().unwrap().pop_front() {
                Some(MockOutcome::Ingest(result)) => result,
                _ => Err(GatewayError::RequestFailed("unexpected upload".into())),
            }
        }

        async fn process_batch(
            &self,
            _documents: Vec<PdfDocument>,
        ) -> Result<IngestReceipt, GatewayError> {
            self.process_pdf(PdfDocument::new("batch", Vec::new())).await
        }
    }

    struct StubSurface;

    impl MapSurface for StubSurface {
        fn scene(
            &self,
            _viewport: &MapViewport,
            markers: &[LawyerRecord],
        ) -> Result<MapScene, MapError> {
            Ok(MapScene {
                url: "stub://map".to_string(),
                marker_count: markers.len(),
            })
        }
    }

    fn lawyer(id: usize) -> LawyerRecord {
        LawyerRecord {
            id: id.to_string(),
            name: format!("Lawyer {id}"),
            latitude: 34.0 + id as f64 * 0.01,
            longitude: -118.2,
            ..Default::default()
        }
    }

    fn controller(outcomes: Vec<MockOutcome>, directory: Vec<LawyerRecord>) -> ChatController {
        let gateway = Arc::new(MockGateway::new(outcomes));
        ChatController::new(
            AskQuestionUseCase::new(gateway.clone()),
            UploadDocumentUseCase::new(gateway),
            Arc::new(StubSurface),
            directory,
        )
        .with_rng(StdRng::seed_from_u64(11))
    }

    fn pdf_file() -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();
        file
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_submit_appends_user_and_bot_messages() {
        let mut controller = controller(
            vec![MockOutcome::Ask(Ok(AskReply {
                answer: "A will is...".to_string(),
                ..Default::default()
            }))],
            Vec::new(),
        );

        controller
            .handle(ChatEvent::Submit("What is a will?".to_string()))
            .await;

        let messages = controller.session().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].text, "A will is...");
    }

    #[tokio::test]
    async fn test_submit_is_ignored_while_busy() {
        let mut controller = controller(Vec::new(), Vec::new());
        controller.session.begin_upload();

        controller
            .handle(ChatEvent::Submit("anyone there?".to_string()))
            .await;

        assert!(controller.session().messages().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_opens_a_sampled_overlay_and_closes_it() {
        let directory: Vec<LawyerRecord> = (0..30).map(lawyer).collect();
        let mut controller = controller(Vec::new(), directory);

        controller.handle(ChatEvent::ToggleOverlay).await;
        let overlay = controller.overlay().expect("overlay should be open");
        assert_eq!(overlay.lawyers().len(), DISPLAY_SAMPLE_SIZE);
        assert_eq!(
            controller.map_scene().unwrap().unwrap().marker_count,
            DISPLAY_SAMPLE_SIZE
        );

        controller.handle(ChatEvent::ToggleOverlay).await;
        assert!(controller.overlay().is_none());
        assert!(controller.map_scene().is_none());
    }

    #[tokio::test]
    async fn test_select_and_close_drive_the_popup() {
        let directory: Vec<LawyerRecord> = (0..3).map(lawyer).collect();
        let mut controller = controller(Vec::new(), directory);

        controller.handle(ChatEvent::ToggleOverlay).await;
        let first_id = controller.overlay().unwrap().lawyers()[0].id.clone();
        let second_id = controller.overlay().unwrap().lawyers()[1].id.clone();

        controller.handle(ChatEvent::SelectMarker(first_id)).await;
        controller
            .handle(ChatEvent::SelectMarker(second_id.clone()))
            .await;
        assert_eq!(
            controller.overlay().unwrap().selected().unwrap().id,
            second_id
        );

        controller.handle(ChatEvent::ClosePopup).await;
        assert!(controller.overlay().unwrap().selected().is_none());
    }

    #[tokio::test]
    async fn test_upload_clears_selected_document_on_success() {
        let file = pdf_file();
        let mut controller = controller(
            vec![MockOutcome::Ingest(Ok(IngestReceipt {
                chunks_processed: Some(3),
                message: None,
            }))],
            Vec::new(),
        );

        controller
            .handle(ChatEvent::Upload(file.path().to_path_buf()))
            .await;

        assert!(controller.selected_document().is_none());
        assert!(controller.session().last_message().unwrap().text.contains('3'));
    }

    #[tokio::test]
    async fn test_upload_clears_selected_document_on_failure() {
        let file = pdf_file();
        let mut controller = controller(
            vec![MockOutcome::Ingest(Err(GatewayError::Connection(
                "refused".into(),
            )))],
            Vec::new(),
        );

        controller
            .handle(ChatEvent::Upload(file.path().to_path_buf()))
            .await;

        assert!(controller.selected_document().is_none());
        assert_eq!(
            controller.session().last_message().unwrap().text,
            UPLOAD_ERROR_TEXT
        );
        assert!(!controller.session().is_uploading());
    }

    #[tokio::test]
    async fn test_unreadable_path_reports_failure_without_gateway_call() {
        let mut controller = controller(Vec::new(), Vec::new());

        controller
            .handle(ChatEvent::Upload(PathBuf::from("/no/such/file.pdf")))
            .await;

        assert_eq!(
            controller.session().last_message().unwrap().text,
            UPLOAD_ERROR_TEXT
        );
        assert!(controller.selected_document().is_none());
    }
}
