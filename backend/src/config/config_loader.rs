use std::{str::FromStr, time::Duration};

use anyhow::{Context, Result};
use crates::{
    domain::value_objects::api_key::ApiKey,
    infra::{
        file_hosting::gofile::{DEFAULT_DISCOVERY_URL, DEFAULT_UPLOAD_URL_TEMPLATE, GofileConfig},
        text_generation::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiConfig},
    },
};
use url::Url;

use super::{
    config_model::{DotEnvyConfig, OpenAi, Server},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<DotEnvyConfig> {
    let server = Server {
        port: parse_or(&lookup, "SERVER_PORT", 8080)?,
        body_limit: parse_or(&lookup, "SERVER_BODY_LIMIT", 512)?,
        timeout: parse_or(&lookup, "SERVER_TIMEOUT", 300)?,
    };

    let discovery_url = non_empty(&lookup, "GOFILE_DISCOVERY_URL")
        .unwrap_or_else(|| DEFAULT_DISCOVERY_URL.to_string());

    let gofile = GofileConfig {
        discovery_url: Url::parse(&discovery_url).context("GOFILE_DISCOVERY_URL is invalid")?,
        upload_url_template: non_empty(&lookup, "GOFILE_UPLOAD_URL_TEMPLATE")
            .unwrap_or_else(|| DEFAULT_UPLOAD_URL_TEMPLATE.to_string()),
        discovery_timeout: Duration::from_secs(parse_or(
            &lookup,
            "GOFILE_DISCOVERY_TIMEOUT_SECS",
            15,
        )?),
        upload_timeout: Duration::from_secs(parse_or(
            &lookup,
            "GOFILE_UPLOAD_TIMEOUT_SECS",
            120,
        )?),
    };

    let openai = OpenAi {
        client: OpenAiConfig {
            base_url: non_empty(&lookup, "OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(&lookup, "OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: parse_optional::<u64>(&lookup, "OPENAI_TIMEOUT_SECS")?
                .map(Duration::from_secs),
        },
        default_api_key: lookup("OPENAI_API_KEY").and_then(|raw| ApiKey::parse(&raw)),
    };

    Ok(DotEnvyConfig {
        server,
        gofile,
        openai,
        stage: get_stage(&lookup),
    })
}

fn get_stage(lookup: &impl Fn(&str) -> Option<String>) -> Stage {
    let stage_str = lookup("STAGE").unwrap_or_default();
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_optional<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty(lookup, key)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("{} is invalid", key))
        })
        .transpose()
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_optional(lookup, key)?.unwrap_or(default))
}
