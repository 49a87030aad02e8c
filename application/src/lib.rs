//! Application layer for legalcompass
//!
//! Use cases and port definitions. Depends only on the domain layer;
//! adapters for the ports live in the infrastructure crate.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    assistant_gateway::{AskReply, AssistantGateway, GatewayError, IngestReceipt, PdfDocument},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    directory_source::{DirectoryError, DirectorySource},
    map_surface::{MapError, MapScene, MapSurface},
};
pub use use_cases::{
    ask_question::AskQuestionUseCase, load_directory::LoadDirectoryUseCase,
    upload_document::UploadDocumentUseCase,
};
