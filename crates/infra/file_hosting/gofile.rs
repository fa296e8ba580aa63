use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    repositories::file_hosting::FileHostingClient,
    value_objects::{
        upstream::{UpstreamEndpoint, UpstreamError},
        uploads::{ServerDescriptor, UploadRequest, UploadResult},
    },
};

pub const DEFAULT_DISCOVERY_URL: &str = "https://api.gofile.io/getServer";
pub const DEFAULT_UPLOAD_URL_TEMPLATE: &str = "https://{server}.gofile.io/uploadFile";
const SERVER_PLACEHOLDER: &str = "{server}";
const STATUS_OK: &str = "ok";

#[derive(Debug, Clone)]
pub struct GofileConfig {
    pub discovery_url: Url,
    /// Upload URL with a `{server}` placeholder for the discovered server name.
    pub upload_url_template: String,
    pub discovery_timeout: Duration,
    pub upload_timeout: Duration,
}

impl GofileConfig {
    pub fn upload_url(&self, server: &ServerDescriptor) -> String {
        self.upload_url_template
            .replace(SERVER_PLACEHOLDER, &server.server_name)
    }
}

pub struct GofileClient {
    client: Client,
    config: GofileConfig,
}

impl GofileClient {
    pub fn new(config: GofileConfig) -> Result<Self> {
        if !config.upload_url_template.contains(SERVER_PLACEHOLDER) {
            anyhow::bail!(
                "gofile upload URL template must contain {}",
                SERVER_PLACEHOLDER
            );
        }

        let client = Client::builder()
            .build()
            .context("failed to build gofile http client")?;

        Ok(Self { client, config })
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ServerData {
    #[serde(default)]
    server: Option<String>,
}

#[async_trait]
impl FileHostingClient for GofileClient {
    async fn locate_server(&self) -> Result<ServerDescriptor, UpstreamError> {
        let endpoint = UpstreamEndpoint::Discovery;

        let response = self
            .client
            .get(self.config.discovery_url.clone())
            .timeout(self.config.discovery_timeout)
            .send()
            .await
            .map_err(|err| map_reqwest_error(endpoint, err))?;

        let (envelope, body) = read_envelope::<ServerData>(endpoint, response).await?;

        let server = envelope
            .data
            .and_then(|data| data.server)
            .filter(|server| !server.trim().is_empty())
            .ok_or_else(|| {
                warn!(body = %body, "gofile: discovery response has no server");
                UpstreamError::MalformedBody {
                    endpoint,
                    detail: "missing data.server".to_string(),
                    body: body.clone(),
                }
            })?;

        debug!(server = %server, "gofile: upload server located");
        Ok(ServerDescriptor::new(server))
    }

    async fn upload_to_server(
        &self,
        server: &ServerDescriptor,
        request: &UploadRequest,
    ) -> Result<UploadResult, UpstreamError> {
        let endpoint = UpstreamEndpoint::Upload;
        let url = self.config.upload_url(server);

        let form = build_form(request).map_err(|err| map_reqwest_error(endpoint, err))?;

        debug!(
            url = %url,
            file_name = %request.file_name,
            size_bytes = request.size_bytes(),
            "gofile: sending upload"
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.config.upload_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|err| map_reqwest_error(endpoint, err))?;

        let (envelope, body) = read_envelope::<UploadResult>(endpoint, response).await?;

        envelope.data.ok_or_else(|| UpstreamError::Rejected { endpoint, body })
    }
}

fn build_form(request: &UploadRequest) -> Result<Form, reqwest::Error> {
    let mime = mime_guess::from_path(&request.file_name).first_or_octet_stream();
    let part = Part::bytes(request.file_bytes.to_vec())
        .file_name(request.file_name.clone())
        .mime_str(mime.as_ref())?;

    Ok(Form::new().part("file", part))
}

/// Reads the body once, checks the HTTP status and the `status` sentinel, and keeps the
/// raw text for error reporting.
async fn read_envelope<T: DeserializeOwned>(
    endpoint: UpstreamEndpoint,
    response: Response,
) -> Result<(Envelope<T>, String), UpstreamError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| map_reqwest_error(endpoint, err))?;

    if !status.is_success() {
        warn!(%endpoint, status = status.as_u16(), "gofile: non-success http status");
        return Err(UpstreamError::HttpStatus {
            endpoint,
            status: status.as_u16(),
            body,
        });
    }

    let envelope: Envelope<T> = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(err) => {
            return Err(UpstreamError::MalformedBody {
                endpoint,
                detail: err.to_string(),
                body,
            });
        }
    };

    if envelope.status.as_deref() != Some(STATUS_OK) {
        warn!(%endpoint, status = ?envelope.status, "gofile: status sentinel is not ok");
        return Err(UpstreamError::Rejected { endpoint, body });
    }

    Ok((envelope, body))
}

fn map_reqwest_error(endpoint: UpstreamEndpoint, error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        return UpstreamError::Timeout { endpoint };
    }
    UpstreamError::Transport {
        endpoint,
        detail: error.to_string(),
    }
}
