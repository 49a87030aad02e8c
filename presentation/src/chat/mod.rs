//! Interactive chat: event dispatch and REPL

pub mod controller;
pub mod repl;
