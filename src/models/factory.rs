use anyhow::{Context, Result};

use super::gemini::{GeminiClient, GeminiConfig};
use super::traits::TextGenerator;
use crate::app::Config;

/// Factory for creating text-generation backends from configuration
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator instance.
    ///
    /// The credential is resolved here, once, from the environment variable
    /// named in the configuration; everything past this point receives it as
    /// an explicit value.
    pub fn create(config: &Config) -> Result<Box<dyn TextGenerator>> {
        let api_key = std::env::var(&config.backend.api_key_env).with_context(|| {
            format!(
                "API key environment variable {} is not set",
                config.backend.api_key_env
            )
        })?;

        let gemini = GeminiConfig::new(api_key)
            .with_model(&config.model.name)
            .with_api_base(&config.backend.api_base)
            .with_temperature(config.model.temperature)
            .with_max_output_tokens(config.model.max_output_tokens);

        Ok(Box::new(GeminiClient::new(gemini)?))
    }
}
