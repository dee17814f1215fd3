use super::message::Message;
use crate::constants::{EMPTY_REPLY_FALLBACK, FAILURE_MESSAGE};

/// Request lifecycle state.
///
/// A tagged state rather than a loose boolean: the transition table below is
/// the only place the single-flight invariant lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

/// Everything that can happen to a conversation
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    InputChanged(String),
    Submitted,
    ResponseArrived(String),
    RequestFailed,
}

/// Outcome of applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Rejected by a guard; no state changed
    Ignored,
}

/// Pure conversation state: history, input buffer, request phase.
///
/// History is append-only; insertion order is conversational order and is
/// what the transcript is rebuilt from on every submission.
#[derive(Debug, Clone)]
pub struct SessionState {
    history: Vec<Message>,
    pending_input: String,
    phase: Phase,
}

impl SessionState {
    /// Create a state seeded with the assistant greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            history: vec![Message::assistant(greeting)],
            pending_input: String::new(),
            phase: Phase::Idle,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn request_in_flight(&self) -> bool {
        self.phase == Phase::AwaitingResponse
    }

    /// Apply one event to the state.
    ///
    /// `Submitted` is rejected while a request is outstanding or while the
    /// trimmed input buffer is empty; rejection is a usability guard, not an
    /// error. `ResponseArrived`/`RequestFailed` are rejected outside
    /// `AwaitingResponse`, so a request can resolve at most once.
    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::InputChanged(text) => {
                self.pending_input = text;
                Transition::Applied
            }
            SessionEvent::Submitted => {
                if self.phase == Phase::AwaitingResponse || self.pending_input.trim().is_empty() {
                    return Transition::Ignored;
                }
                let text = std::mem::take(&mut self.pending_input);
                self.history.push(Message::user(text));
                self.phase = Phase::AwaitingResponse;
                Transition::Applied
            }
            SessionEvent::ResponseArrived(text) => {
                if self.phase != Phase::AwaitingResponse {
                    return Transition::Ignored;
                }
                // Never append an empty assistant turn
                let text = if text.trim().is_empty() {
                    EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    text
                };
                self.history.push(Message::assistant(text));
                self.phase = Phase::Idle;
                Transition::Applied
            }
            SessionEvent::RequestFailed => {
                if self.phase != Phase::AwaitingResponse {
                    return Transition::Ignored;
                }
                self.history.push(Message::assistant(FAILURE_MESSAGE));
                self.phase = Phase::Idle;
                Transition::Applied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::message::MessageRole;
    use pretty_assertions::assert_eq;

    fn submitted(state: &mut SessionState, input: &str) -> Transition {
        state.apply(SessionEvent::InputChanged(input.to_string()));
        state.apply(SessionEvent::Submitted)
    }

    #[test]
    fn test_starts_with_greeting_and_idle() {
        let state = SessionState::new("hello");
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].role, MessageRole::Assistant);
        assert_eq!(state.history()[0].text, "hello");
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.request_in_flight());
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_input() {
        let mut state = SessionState::new("hi");
        assert_eq!(submitted(&mut state, "Reduce onboarding time"), Transition::Applied);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].role, MessageRole::User);
        assert_eq!(state.history()[1].text, "Reduce onboarding time");
        assert_eq!(state.pending_input(), "");
        assert!(state.request_in_flight());
    }

    #[test]
    fn test_whitespace_only_input_is_rejected() {
        let mut state = SessionState::new("hi");
        assert_eq!(submitted(&mut state, "   \t  "), Transition::Ignored);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.pending_input(), "   \t  ");
        assert!(!state.request_in_flight());
    }

    #[test]
    fn test_second_submit_while_awaiting_is_rejected() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "first");
        let rejected = submitted(&mut state, "second");
        assert_eq!(rejected, Transition::Ignored);
        // Only the first user message made it into history
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].text, "first");
        // The second input is preserved, not lost
        assert_eq!(state.pending_input(), "second");
    }

    #[test]
    fn test_response_returns_to_idle() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "question");
        let applied = state.apply(SessionEvent::ResponseArrived("answer".to_string()));
        assert_eq!(applied, Transition::Applied);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.history()[2].role, MessageRole::Assistant);
        assert_eq!(state.history()[2].text, "answer");
        assert!(!state.request_in_flight());
    }

    #[test]
    fn test_empty_response_substitutes_fallback() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "question");
        state.apply(SessionEvent::ResponseArrived(String::new()));
        assert_eq!(state.history()[2].text, EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn test_blank_response_substitutes_fallback() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "question");
        state.apply(SessionEvent::ResponseArrived("  \n ".to_string()));
        assert_eq!(state.history()[2].text, EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn test_failure_appends_fixed_message_and_returns_to_idle() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "question");
        let applied = state.apply(SessionEvent::RequestFailed);
        assert_eq!(applied, Transition::Applied);
        assert_eq!(state.history()[2].text, FAILURE_MESSAGE);
        assert!(!state.request_in_flight());
    }

    #[test]
    fn test_resolution_without_outstanding_request_is_rejected() {
        let mut state = SessionState::new("hi");
        assert_eq!(
            state.apply(SessionEvent::ResponseArrived("stray".to_string())),
            Transition::Ignored
        );
        assert_eq!(state.apply(SessionEvent::RequestFailed), Transition::Ignored);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_double_resolution_is_rejected() {
        let mut state = SessionState::new("hi");
        submitted(&mut state, "question");
        state.apply(SessionEvent::ResponseArrived("answer".to_string()));
        assert_eq!(
            state.apply(SessionEvent::ResponseArrived("again".to_string())),
            Transition::Ignored
        );
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_history_alternates_over_successive_rounds() {
        let mut state = SessionState::new("greeting");
        for i in 0..3 {
            submitted(&mut state, &format!("question {i}"));
            state.apply(SessionEvent::ResponseArrived(format!("answer {i}")));
        }
        // 1 greeting + 2 messages per round
        assert_eq!(state.history().len(), 7);
        for (i, message) in state.history().iter().enumerate().skip(1) {
            let expected = if i % 2 == 1 {
                MessageRole::User
            } else {
                MessageRole::Assistant
            };
            assert_eq!(message.role, expected);
        }
    }
}
