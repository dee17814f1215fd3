// Gateway module for models - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod factory;
mod gemini;
mod traits;
mod types;

// Public re-exports - the ONLY way to access model functionality
pub use factory::GeneratorFactory;
pub use gemini::{GeminiClient, GeminiConfig};
pub use traits::TextGenerator;
pub use types::{GenerateRequest, GenerateResponse};

#[cfg(test)]
pub use traits::MockTextGenerator;
