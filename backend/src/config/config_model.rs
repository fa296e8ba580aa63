use crates::{
    domain::value_objects::api_key::ApiKey,
    infra::{file_hosting::gofile::GofileConfig, text_generation::openai::OpenAiConfig},
};

use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub gofile: GofileConfig,
    pub openai: OpenAi,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    /// MiB
    pub body_limit: u64,
    /// seconds
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct OpenAi {
    pub client: OpenAiConfig,
    /// Used when a request does not carry its own key.
    pub default_api_key: Option<ApiKey>,
}
