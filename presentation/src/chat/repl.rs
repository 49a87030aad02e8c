//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::StatusSpinner;
use crate::chat::controller::{ChatController, ChatEvent};
use compass_domain::Sender;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive chat REPL
///
/// Translates terminal input into [`ChatEvent`]s and prints whatever the
/// controller appended to the session since the previous turn.
pub struct ChatRepl {
    controller: ChatController,
    printed: usize,
    show_progress: bool,
    keep_history: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            printed: 0,
            show_progress: true,
            keep_history: true,
        }
    }

    /// Set whether to show the in-flight spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set whether to persist readline history
    pub fn with_history(mut self, keep: bool) -> Self {
        self.keep_history = keep;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self
            .keep_history
            .then(|| dirs::data_dir().map(|p| p.join("legalcompass").join("history.txt")))
            .flatten();

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        LegalCompass - Chat Mode             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Lawyer directory: {} records", self.controller.directory_len());
        println!();
        println!("Commands:");
        println!("  /help            - Show this help");
        println!("  /map             - Toggle the lawyer map overlay");
        println!("  /select <id>     - Open a lawyer's detail popup");
        println!("  /close           - Close the detail popup");
        println!("  /upload <paths>  - Upload PDFs for ingestion");
        println!("  /quit            - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let head = parts.next().unwrap_or("");

        match head {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_welcome();
                false
            }
            "/map" | "/m" => {
                self.controller.handle(ChatEvent::ToggleOverlay).await;
                self.print_overlay();
                false
            }
            "/select" => {
                match parts.next() {
                    Some(id) => {
                        self.controller
                            .handle(ChatEvent::SelectMarker(id.to_string()))
                            .await;
                        self.print_popup(id);
                    }
                    None => println!("Usage: /select <id>"),
                }
                false
            }
            "/close" => {
                self.controller.handle(ChatEvent::ClosePopup).await;
                println!("Popup closed.");
                false
            }
            "/upload" | "/u" => {
                let paths: Vec<PathBuf> = parts.map(PathBuf::from).collect();
                if paths.is_empty() {
                    println!("Usage: /upload <path> [more paths]");
                } else {
                    self.process_upload(paths).await;
                }
                false
            }
            _ => {
                println!("Unknown command: {}", head);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&mut self, line: &str) {
        println!();

        let spinner = self.show_progress.then(StatusSpinner::thinking);
        self.controller
            .handle(ChatEvent::Submit(line.to_string()))
            .await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        self.print_new_messages();
        println!();
    }

    async fn process_upload(&mut self, paths: Vec<PathBuf>) {
        let spinner = self.show_progress.then(StatusSpinner::uploading);
        let event = if paths.len() == 1 {
            ChatEvent::Upload(paths.into_iter().next().expect("one path"))
        } else {
            ChatEvent::UploadBatch(paths)
        };
        self.controller.handle(event).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        self.print_new_messages();
    }

    /// Print messages appended since the previous turn. The user's own
    /// input is not echoed back.
    fn print_new_messages(&mut self) {
        let messages = self.controller.session().messages();
        for message in &messages[self.printed..] {
            if message.sender != Sender::User {
                println!("{}", ConsoleFormatter::format_message(message));
            }
        }
        self.printed = messages.len();
    }

    fn print_overlay(&self) {
        match self.controller.overlay() {
            Some(overlay) => {
                let scene = self.controller.map_scene();
                println!(
                    "{}",
                    ConsoleFormatter::format_overlay(overlay, scene.as_ref())
                );
            }
            None => println!("Overlay hidden."),
        }
    }

    fn print_popup(&self, id: &str) {
        match self.controller.overlay().and_then(|o| o.selected()) {
            Some(lawyer) if lawyer.id == id => {
                println!("{}", ConsoleFormatter::format_popup(lawyer));
            }
            _ => println!("No lawyer with id {} in the current view.", id),
        }
    }
}
