//! Console output formatter for chat messages and the map overlay

use colored::Colorize;
use compass_application::{MapError, MapScene};
use compass_domain::{LawyerRecord, Message, OverlayState, Sender};

/// Formats session messages and overlay views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one chat message, including attached lawyer details.
    pub fn format_message(message: &Message) -> String {
        let tag = match message.sender {
            Sender::User => "you".cyan().bold(),
            Sender::Bot => "assistant".green().bold(),
            Sender::System => "system".yellow().bold(),
        };

        let mut output = format!("{} {}", tag, message.text);

        if let Some(source) = &message.source {
            output.push_str(&format!(" {}", format!("[{}]", source).dimmed()));
        }

        for lawyer in &message.details {
            output.push_str(&format!("\n  * {}", Self::summary_line(lawyer)));
        }

        output
    }

    /// One-line summary used in recommendation lists.
    fn summary_line(lawyer: &LawyerRecord) -> String {
        let mut line = lawyer.name.clone();
        if !lawyer.specialization.is_empty() {
            line.push_str(&format!(", {}", lawyer.specialization));
        }
        if !lawyer.address.is_empty() {
            line.push_str(&format!(", located at {}", lawyer.address));
        }
        line
    }

    /// Format the overlay: the lawyer list panel plus the map panel.
    pub fn format_overlay(
        overlay: &OverlayState,
        scene: Option<&Result<MapScene, MapError>>,
    ) -> String {
        if overlay.is_empty() {
            return "No lawyers available.".to_string();
        }

        let mut output = format!("{}\n", "Lawyers".bold());
        for lawyer in overlay.lawyers() {
            output.push_str(&format!(
                "  [{}] {}",
                lawyer.id.yellow(),
                lawyer.name.bold()
            ));
            if !lawyer.category.is_empty() {
                output.push_str(&format!(" - {}", lawyer.category));
            }
            output.push('\n');
        }

        match scene {
            Some(Ok(scene)) => {
                output.push_str(&format!("{} {}\n", "Map:".bold(), scene.url));
            }
            Some(Err(e)) => {
                // Static placeholder, no retry
                output.push_str(&format!("{}\n", format!("Map unavailable: {}", e).dimmed()));
            }
            None => {}
        }

        output.push_str("Select a lawyer with /select <id>, close with /close.");
        output
    }

    /// Format the detail popup for a selected lawyer.
    pub fn format_popup(lawyer: &LawyerRecord) -> String {
        let mut output = format!("{}\n", lawyer.name.bold());

        let mut field = |label: &str, value: &str| {
            if !value.is_empty() {
                output.push_str(&format!("  {} {}\n", format!("{}:", label).cyan(), value));
            }
        };

        field("Specialization", &lawyer.specialization);
        field("Address", &lawyer.address);
        field("Phone", &lawyer.phone);
        if lawyer.rating.is_finite() {
            field("Rating", &format!("{:.1}", lawyer.rating));
        }
        field("Website", &lawyer.website);
        field("Education", &lawyer.education);
        field("Awards", &lawyer.awards);
        field("Profile", &lawyer.profile_url);

        output.trim_end().to_string()
    }
}
