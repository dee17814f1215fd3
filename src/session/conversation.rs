use tokio::sync::watch;
use tracing::debug;

use super::message::Message;
use super::state::{SessionEvent, SessionState, Transition};
use super::transcript;
use crate::constants::{GREETING, SYSTEM_INSTRUCTION};
use crate::models::{GenerateRequest, TextGenerator};

/// Persona the assistant speaks with: the greeting that opens every
/// conversation and the policy instruction sent with every request.
#[derive(Debug, Clone)]
pub struct Persona {
    pub greeting: String,
    pub system_instruction: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            greeting: GREETING.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

/// Immutable view of the conversation for the presentation layer
#[derive(Debug, Clone)]
pub struct ConversationSnapshot {
    pub messages: Vec<Message>,
    pub request_in_flight: bool,
}

/// A single consultant dialogue.
///
/// Owns the message history and the request lifecycle. One instance per open
/// conversation; nothing is persisted when it is dropped. The presentation
/// layer reads state through [`ConversationSnapshot`]s and writes through
/// `set_pending_input`/`submit`/`close` only.
pub struct ConversationSession {
    state: SessionState,
    persona: Persona,
    generator: Box<dyn TextGenerator>,
    snapshot_tx: watch::Sender<ConversationSnapshot>,
}

impl ConversationSession {
    /// Create a session with the default persona
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self::with_persona(generator, Persona::default())
    }

    /// Create a session seeded with the persona's greeting
    pub fn with_persona(generator: Box<dyn TextGenerator>, persona: Persona) -> Self {
        let state = SessionState::new(persona.greeting.clone());
        let (snapshot_tx, _) = watch::channel(snapshot_of(&state));

        Self {
            state,
            persona,
            generator,
            snapshot_tx,
        }
    }

    /// Replace the unsent input buffer. Any string is accepted; constraints
    /// are enforced at submit time.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.state.apply(SessionEvent::InputChanged(text.into()));
    }

    pub fn pending_input(&self) -> &str {
        self.state.pending_input()
    }

    pub fn history(&self) -> &[Message] {
        self.state.history()
    }

    pub fn request_in_flight(&self) -> bool {
        self.state.request_in_flight()
    }

    /// Current state as an immutable snapshot
    pub fn snapshot(&self) -> ConversationSnapshot {
        snapshot_of(&self.state)
    }

    /// Subscribe to snapshot updates; a new value is published after every
    /// observable state change.
    pub fn subscribe(&self) -> watch::Receiver<ConversationSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Submit the pending input.
    ///
    /// A no-op while the input is blank or a request is outstanding. The
    /// user message is appended and the buffer cleared before the backend
    /// call suspends; this is the session's only suspension point, so at
    /// most one request is ever outstanding and replies land in submission
    /// order.
    ///
    /// All backend outcomes become conversational turns: a reply, the fixed
    /// fallback when the reply is blank, or the fixed failure message. No
    /// error escapes this method and the session always returns to a
    /// submittable state.
    pub async fn submit(&mut self) {
        if self.state.apply(SessionEvent::Submitted) == Transition::Ignored {
            return;
        }
        self.publish();

        // Full history at submission time, user message included
        let request = GenerateRequest {
            transcript: transcript::render(self.state.history()),
            system_instruction: self.persona.system_instruction.clone(),
        };

        let event = match self.generator.generate(request).await {
            Ok(response) => SessionEvent::ResponseArrived(response.text),
            Err(err) => {
                debug!("text generation failed: {err}");
                SessionEvent::RequestFailed
            }
        };

        self.state.apply(event);
        self.publish();
    }

    /// Discard the session. Nothing is persisted and no backend call is
    /// made; subscribers observe the channel closing.
    pub fn close(self) {}

    fn publish(&self) {
        self.snapshot_tx.send_replace(snapshot_of(&self.state));
    }
}

fn snapshot_of(state: &SessionState) -> ConversationSnapshot {
    ConversationSnapshot {
        messages: state.history().to_vec(),
        request_in_flight: state.request_in_flight(),
    }
}
