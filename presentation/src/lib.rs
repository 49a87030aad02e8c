//! Presentation layer for legalcompass
//!
//! The clap CLI definition, the rustyline chat REPL, the event-dispatch
//! controller that owns the session, and console output formatting.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{
    controller::{ChatController, ChatEvent},
    repl::ChatRepl,
};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::StatusSpinner;
