pub mod app;
pub mod cli;
pub mod constants;
pub mod models;
pub mod runtime;
pub mod session;
pub mod utils;

pub use app::{load_config, Config};
pub use models::{GeneratorFactory, TextGenerator};
pub use session::{ConversationSession, ConversationSnapshot, Persona};
pub use utils::ConsultantError;
