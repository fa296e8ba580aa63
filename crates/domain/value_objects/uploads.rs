use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A file submitted by the user, consumed by a single upload attempt.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub file_bytes: Bytes,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, file_bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            file_bytes: file_bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.file_bytes.len()
    }

    pub fn has_file_name(&self) -> bool {
        !self.file_name.trim().is_empty()
    }
}

/// Upload server picked by the discovery endpoint. Only valid for the attempt that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    pub server_name: String,
}

impl ServerDescriptor {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
        }
    }
}

/// The `data` object of a successful upload response. Every field is passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    #[serde(default)]
    pub download_page: Option<String>,
    #[serde(default)]
    pub direct_link: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

impl UploadResult {
    /// The link shown to the user: the download page, else the direct link.
    pub fn public_link(&self) -> Option<&str> {
        [self.download_page.as_deref(), self.direct_link.as_deref()]
            .into_iter()
            .flatten()
            .find(|link| !link.trim().is_empty())
    }
}
