//! Use cases
//!
//! One module per user-visible operation. Each use case owns its ports via
//! `Arc<dyn …>` and mutates the session it is handed; gateway failures are
//! folded into chat messages here and never propagate further.

pub mod ask_question;
pub mod load_directory;
pub mod upload_document;
