// Gateway module for the conversation session - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod conversation;
mod message;
mod state;
mod transcript;

// Public re-exports - the ONLY way to access session functionality
pub use conversation::{ConversationSession, ConversationSnapshot, Persona};
pub use message::{Message, MessageRole};
