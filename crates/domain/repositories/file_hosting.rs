use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::{
    upstream::UpstreamError,
    uploads::{ServerDescriptor, UploadRequest, UploadResult},
};

#[automock]
#[async_trait]
pub trait FileHostingClient {
    /// Asks the discovery endpoint which server should receive the next upload.
    async fn locate_server(&self) -> Result<ServerDescriptor, UpstreamError>;

    async fn upload_to_server(
        &self,
        server: &ServerDescriptor,
        request: &UploadRequest,
    ) -> Result<UploadResult, UpstreamError>;
}
