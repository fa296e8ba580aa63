use anyhow::Result;
use backend::axum_http::http_serve;
use backend::config::config_loader;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Global link server exited with error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    crates::observability::init_observability("global-link")?;

    let dotenvy_env = config_loader::load()?;
    info!(
        stage = %dotenvy_env.stage,
        default_api_key = dotenvy_env.openai.default_api_key.is_some(),
        "ENV has been loaded"
    );

    http_serve::start(Arc::new(dotenvy_env)).await?;

    Ok(())
}
