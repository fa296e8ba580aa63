use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{api_key::ApiKey, confirmation::ChatPrompt};

#[automock]
#[async_trait]
pub trait TextGenerationClient {
    /// Returns the first completion's raw text.
    async fn complete(&self, credential: &ApiKey, prompt: &ChatPrompt) -> Result<String>;
}
