//! CLI entrypoint for LegalCompass
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use compass_application::{
    AskQuestionUseCase, ConversationLogger, LoadDirectoryUseCase, NoConversationLogger,
    UploadDocumentUseCase,
};
use compass_infrastructure::{
    ConfigLoader, HttpAssistantGateway, HttpDirectorySource, StaticMapProvider, TranscriptLogger,
};
use compass_domain::Sender;
use compass_presentation::{
    ChatController, ChatEvent, ChatRepl, Cli, ConsoleFormatter, StatusSpinner,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{}", e))?
    };

    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
    }

    info!("Starting LegalCompass (gateway: {})", config.api.base_url);

    // === Dependency Injection ===
    let client = reqwest::Client::new();
    let gateway = Arc::new(HttpAssistantGateway::new(
        client.clone(),
        &config.api.base_url,
    ));
    let directory_source = Arc::new(HttpDirectorySource::new(client, config.directory_url()));
    let map = Arc::new(StaticMapProvider::new(
        &config.map.endpoint,
        &config.map.api_key,
        config.map.width,
        config.map.height,
    ));

    let logger: Arc<dyn ConversationLogger> = if cli.transcript || config.repl.transcript {
        match TranscriptLogger::default_path().and_then(TranscriptLogger::new) {
            Some(logger) => {
                info!("Transcript: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        }
    } else {
        Arc::new(NoConversationLogger)
    };

    let ask = AskQuestionUseCase::new(gateway.clone()).with_conversation_logger(logger.clone());
    let upload = UploadDocumentUseCase::new(gateway).with_conversation_logger(logger);

    // Load the directory once at startup; a failure degrades the overlay
    // to an empty record set without blocking chat.
    let directory = LoadDirectoryUseCase::new(directory_source).execute().await;

    let mut controller = ChatController::new(ask, upload, map, directory);

    // One-shot uploads run before chat or question handling
    if !cli.upload.is_empty() {
        let spinner = (!cli.quiet).then(StatusSpinner::uploading);
        let event = if cli.upload.len() == 1 {
            ChatEvent::Upload(cli.upload[0].clone())
        } else {
            ChatEvent::UploadBatch(cli.upload.clone())
        };
        controller.handle(event).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }
        print_session_tail(&controller, 0);
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(controller)
            .with_progress(!cli.quiet)
            .with_history(config.repl.history);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required unless this was an
    // upload-only invocation
    let question = match cli.question {
        Some(q) => q,
        None => {
            if !cli.upload.is_empty() {
                return Ok(());
            }
            bail!("Question is required. Use --chat for interactive mode.");
        }
    };

    let before = controller.session().messages().len();
    let spinner = (!cli.quiet).then(StatusSpinner::thinking);
    controller.handle(ChatEvent::Submit(question)).await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    print_session_tail(&controller, before);

    Ok(())
}

/// Print every non-user message appended at or after `from`.
fn print_session_tail(controller: &ChatController, from: usize) {
    for message in &controller.session().messages()[from..] {
        if message.sender != Sender::User {
            println!("{}", ConsoleFormatter::format_message(message));
        }
    }
}
