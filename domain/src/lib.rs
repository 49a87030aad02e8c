//! Domain layer for legalcompass
//!
//! Core entities and pure logic for the chat client: the chat session and
//! its append-only message log, the lawyer directory records, the display
//! sampler, and the map-overlay selection state. This crate has no
//! infrastructure or presentation dependencies.

pub mod core;
pub mod directory;
pub mod overlay;
pub mod session;

// Re-export commonly used types
pub use self::core::question::Question;
pub use directory::{
    entities::LawyerRecord,
    sample::{DISPLAY_SAMPLE_SIZE, display_sample},
};
pub use overlay::{MapViewport, OverlayState};
pub use session::entities::{ChatSession, Message, Sender};
