use super::message::{Message, MessageRole};
use crate::constants::{ASSISTANT_LABEL, USER_LABEL};

/// Render the conversation history as a single prompt.
///
/// The backend keeps no session memory; this transcript, rebuilt from the
/// full history on every submission, is the only context it ever sees.
/// One line per message in history order, then the cue for the assistant's
/// next turn.
pub fn render(history: &[Message]) -> String {
    let lines: Vec<String> = history
        .iter()
        .map(|m| format!("{}: {}", label(m.role), m.text))
        .collect();

    format!("{}\n{}:", lines.join("\n"), ASSISTANT_LABEL)
}

fn label(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => USER_LABEL,
        MessageRole::Assistant => ASSISTANT_LABEL,
    }
}
