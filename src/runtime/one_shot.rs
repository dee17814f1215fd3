use anyhow::{Context, Result};

use crate::models::TextGenerator;
use crate::session::{ConversationSession, MessageRole, Persona};

/// Single-prompt execution for `--prompt` mode
pub struct OneShotRunner {
    session: ConversationSession,
}

impl OneShotRunner {
    pub fn new(generator: Box<dyn TextGenerator>, persona: Persona) -> Self {
        Self {
            session: ConversationSession::with_persona(generator, persona),
        }
    }

    /// Run one submission and return the assistant's reply
    pub async fn execute(mut self, prompt: impl Into<String>) -> Result<String> {
        self.session.set_pending_input(prompt);

        let before = self.session.history().len();
        self.session.submit().await;

        let reply = self.session.history()[before..]
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.text.clone());

        self.session.close();
        reply.context("Nothing was submitted: the prompt is empty")
    }
}
