use crates::domain::{
    repositories::file_hosting::FileHostingClient,
    value_objects::{
        upstream::UpstreamError,
        uploads::{UploadRequest, UploadResult},
    },
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Locates an upload server, then sends the whole file to it in one request.
pub struct UploaderUseCase<H>
where
    H: FileHostingClient + Send + Sync + 'static,
{
    hosting_client: Arc<H>,
}

impl<H> UploaderUseCase<H>
where
    H: FileHostingClient + Send + Sync + 'static,
{
    pub fn new(hosting_client: Arc<H>) -> Self {
        Self { hosting_client }
    }

    pub async fn upload(&self, request: &UploadRequest) -> Result<UploadResult, UpstreamError> {
        let server = self.hosting_client.locate_server().await.map_err(|err| {
            error!(
                file_name = %request.file_name,
                error = %err,
                "uploader: failed to locate upload server"
            );
            err
        })?;

        debug!(
            file_name = %request.file_name,
            server = %server.server_name,
            "uploader: server located"
        );

        let result = self
            .hosting_client
            .upload_to_server(&server, request)
            .await
            .map_err(|err| {
                error!(
                    file_name = %request.file_name,
                    server = %server.server_name,
                    error = %err,
                    "uploader: upload failed"
                );
                err
            })?;

        info!(
            file_name = %request.file_name,
            server = %server.server_name,
            size_bytes = request.size_bytes(),
            file_id = ?result.file_id,
            "uploader: upload completed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        repositories::file_hosting::MockFileHostingClient,
        value_objects::{upstream::UpstreamEndpoint, uploads::ServerDescriptor},
    };

    fn deck() -> UploadRequest {
        UploadRequest::new("deck.pdf", b"%PDF".to_vec())
    }

    #[tokio::test]
    async fn uploads_to_located_server() {
        let mut hosting_client = MockFileHostingClient::new();

        hosting_client
            .expect_locate_server()
            .times(1)
            .returning(|| Ok(ServerDescriptor::new("srv1")));

        hosting_client
            .expect_upload_to_server()
            .withf(|server, request| {
                server.server_name == "srv1"
                    && request.file_name == "deck.pdf"
                    && &request.file_bytes[..] == b"%PDF"
            })
            .times(1)
            .returning(|_, _| {
                Ok(UploadResult {
                    download_page: Some("https://gofile.io/d/abc123".to_string()),
                    direct_link: None,
                    file_id: Some("f-1".to_string()),
                })
            });

        let usecase = UploaderUseCase::new(Arc::new(hosting_client));
        let result = usecase.upload(&deck()).await.unwrap();

        assert_eq!(result.public_link(), Some("https://gofile.io/d/abc123"));
        assert_eq!(result.file_id.as_deref(), Some("f-1"));
    }

    #[tokio::test]
    async fn discovery_failure_skips_upload() {
        let mut hosting_client = MockFileHostingClient::new();

        hosting_client.expect_locate_server().times(1).returning(|| {
            Err(UpstreamError::Rejected {
                endpoint: UpstreamEndpoint::Discovery,
                body: r#"{"status":"error"}"#.to_string(),
            })
        });
        hosting_client.expect_upload_to_server().times(0);

        let usecase = UploaderUseCase::new(Arc::new(hosting_client));
        let error = usecase.upload(&deck()).await.unwrap_err();

        assert_eq!(error.endpoint(), Some(UpstreamEndpoint::Discovery));
    }

    #[tokio::test]
    async fn upload_failure_is_propagated() {
        let mut hosting_client = MockFileHostingClient::new();

        hosting_client
            .expect_locate_server()
            .returning(|| Ok(ServerDescriptor::new("srv1")));
        hosting_client.expect_upload_to_server().returning(|_, _| {
            Err(UpstreamError::HttpStatus {
                endpoint: UpstreamEndpoint::Upload,
                status: 500,
                body: "boom".to_string(),
            })
        });

        let usecase = UploaderUseCase::new(Arc::new(hosting_client));
        let error = usecase.upload(&deck()).await.unwrap_err();

        assert!(error.to_string().contains("boom"));
    }
}
