use crate::{
    axum_http::{error_responses::AppError, page_view::PageView},
    config::config_model::DotEnvyConfig,
    usecases::global_link::GlobalLinkUseCase,
};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    routing::post,
};
use bytes::Bytes;
use crates::{
    domain::{
        repositories::{file_hosting::FileHostingClient, text_generation::TextGenerationClient},
        value_objects::{api_key::ApiKey, uploads::UploadRequest},
    },
    infra::{
        file_hosting::gofile::GofileClient, text_generation::openai::OpenAiChatClient,
    },
};
use std::sync::Arc;
use tracing::{debug, warn};

const FILE_FIELD: &str = "file";
const API_KEY_FIELD: &str = "api_key";

pub fn routes(config: Arc<DotEnvyConfig>) -> Result<Router> {
    let hosting_client = GofileClient::new(config.gofile.clone())?;
    let text_client = OpenAiChatClient::new(config.openai.client.clone())?;

    let usecase = GlobalLinkUseCase::new(
        Arc::new(hosting_client),
        Arc::new(text_client),
        config.openai.default_api_key.clone(),
    );

    Ok(Router::new()
        .route(
            "/",
            post(generate_global_link::<GofileClient, OpenAiChatClient>),
        )
        .with_state(Arc::new(usecase)))
}

pub async fn generate_global_link<H, T>(
    State(usecase): State<Arc<GlobalLinkUseCase<H, T>>>,
    multipart: Multipart,
) -> Result<Json<PageView>, AppError>
where
    H: FileHostingClient + Send + Sync + 'static,
    T: TextGenerationClient + Send + Sync + 'static,
{
    let form = read_form(multipart).await?;

    let Some((file_name, file_bytes)) = form.file else {
        return Err(AppError::BadRequest("Please upload a file first.".to_string()));
    };

    let global_link = usecase
        .generate_global_link(UploadRequest::new(file_name, file_bytes), form.api_key)
        .await?;

    Ok(Json(PageView::from(global_link)))
}

#[derive(Default)]
struct LinkForm {
    file: Option<(String, Bytes)>,
    api_key: Option<ApiKey>,
}

async fn read_form(mut multipart: Multipart) -> Result<LinkForm, AppError> {
    let mut form = LinkForm::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(form_error)?;
                debug!(file_name = %file_name, size_bytes = bytes.len(), "global_links: file received");
                form.file = Some((file_name, bytes));
            }
            Some(API_KEY_FIELD) => {
                let raw = field.text().await.map_err(form_error)?;
                form.api_key = ApiKey::parse(&raw);
            }
            other => {
                debug!(field = ?other, "global_links: ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

fn form_error(err: MultipartError) -> AppError {
    warn!(error = %err, status = %err.status(), "global_links: invalid multipart body");
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(format!("Invalid upload form: {}", err.body_text()))
    }
}
