//! Ask question use case.
//!
//! Sends a user question to the assistant gateway and folds the reply into
//! the session log. The user message is appended synchronously before the
//! request; the bot reply (and an optional recommendations message) only
//! after the call settles, so message order reflects arrival order.

use crate::ports::assistant_gateway::AssistantGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use compass_domain::{ChatSession, Message, Question};
use std::sync::Arc;
use tracing::{debug, warn};

/// Bot text shown for any failed ask request, whatever the cause.
pub const ANSWER_ERROR_TEXT: &str = "Error getting response";

/// Header of the bot message carrying recommended lawyers as details.
pub const RECOMMENDATIONS_HEADER: &str = "Lawyer Recommendations:";

/// Use case for asking the assistant a question.
pub struct AskQuestionUseCase {
    gateway: Arc<dyn AssistantGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AskQuestionUseCase {
    pub fn new(gateway: Arc<dyn AssistantGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute one ask exchange against the given session.
    ///
    /// Blank input is ignored without touching the session. The
    /// `processing` flag is set for the duration of the gateway call and
    /// cleared on every exit path.
    pub async fn execute(&self, session: &mut ChatSession, input: &str) {
        let Some(question) = Question::try_new(input) else {
            debug!("Ignoring blank question submission");
            return;
        };

        session.push(Message::user(question.content()));
        session.begin_processing();

        match self.gateway.ask(&question).await {
            Ok(reply) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "ask_response",
                    serde_json::json!({
                        "question": question.content(),
                        "answer_bytes": reply.answer.len(),
                        "source": reply.source,
                        "sources": reply.sources,
                        "recommendations": reply.recommendations.len(),
                    }),
                ));

                let mut answer = Message::bot(reply.answer);
                if let Some(source) = reply.source {
                    answer = answer.with_source(source);
                }
                session.push(answer);

                if !reply.recommendations.is_empty() {
                    session.push(
                        Message::bot(RECOMMENDATIONS_HEADER)
                            .with_details(reply.recommendations)
                            .with_source("lawyer_info"),
                    );
                }
            }
            Err(e) => {
                warn!("Ask request failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "ask_failed",
                    serde_json::json!({
                        "question": question.content(),
                        "error": e.to_string(),
                    }),
                ));
                session.push(Message::bot(ANSWER_ERROR_TEXT).with_source("error"));
            }
        }

        session.finish_processing();
    }
}
