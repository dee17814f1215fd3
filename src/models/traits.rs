use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::types::{GenerateRequest, GenerateResponse};
use crate::utils::ConsultantError;

/// Core trait that all text-generation backends must implement
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt to the backend and get the assistant's reply
    async fn generate(&self, request: GenerateRequest)
        -> Result<GenerateResponse, ConsultantError>;
}
