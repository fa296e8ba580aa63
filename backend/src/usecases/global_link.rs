use crates::domain::{
    repositories::{file_hosting::FileHostingClient, text_generation::TextGenerationClient},
    value_objects::{
        api_key::ApiKey,
        confirmation::ConfirmationMessage,
        upstream::UpstreamError,
        uploads::{UploadRequest, UploadResult},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use super::{message_composer::MessageComposer, uploader::UploaderUseCase};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("Please upload a file first.")]
    MissingFile,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Debug, Clone)]
pub struct GlobalLink {
    pub file_name: String,
    pub link: String,
    pub upload: UploadResult,
    pub confirmation: ConfirmationMessage,
}

/// Upload → link → confirmation, for one trigger press.
pub struct GlobalLinkUseCase<H, T>
where
    H: FileHostingClient + Send + Sync + 'static,
    T: TextGenerationClient + Send + Sync + 'static,
{
    uploader: UploaderUseCase<H>,
    composer: MessageComposer<T>,
    default_credential: Option<ApiKey>,
}

impl<H, T> GlobalLinkUseCase<H, T>
where
    H: FileHostingClient + Send + Sync + 'static,
    T: TextGenerationClient + Send + Sync + 'static,
{
    pub fn new(
        hosting_client: Arc<H>,
        text_client: Arc<T>,
        default_credential: Option<ApiKey>,
    ) -> Self {
        Self {
            uploader: UploaderUseCase::new(hosting_client),
            composer: MessageComposer::new(text_client),
            default_credential,
        }
    }

    /// `credential` is the caller's own key; without one the configured default is used.
    pub async fn generate_global_link(
        &self,
        request: UploadRequest,
        credential: Option<ApiKey>,
    ) -> Result<GlobalLink, LinkError> {
        if !request.has_file_name() {
            return Err(LinkError::MissingFile);
        }

        let upload_id = Uuid::new_v4();
        info!(
            %upload_id,
            file_name = %request.file_name,
            size_bytes = request.size_bytes(),
            "global_link: uploading file"
        );

        let upload = self.uploader.upload(&request).await?;

        let Some(link) = upload.public_link().map(str::to_string) else {
            warn!(
                %upload_id,
                file_name = %request.file_name,
                upload = ?upload,
                "global_link: hosting service returned no link"
            );
            return Err(LinkError::Upstream(UpstreamError::MissingLink));
        };

        let credential = credential.or_else(|| self.default_credential.clone());
        let confirmation = self
            .composer
            .compose(&link, &request.file_name, credential.as_ref())
            .await;

        info!(
            %upload_id,
            file_name = %request.file_name,
            link = %link,
            message_source = ?confirmation.source(),
            "global_link: link generated"
        );

        Ok(GlobalLink {
            file_name: request.file_name,
            link,
            upload,
            confirmation,
        })
    }
}
