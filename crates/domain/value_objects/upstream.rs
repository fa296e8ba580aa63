use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    Discovery,
    Upload,
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamEndpoint::Discovery => write!(f, "server discovery"),
            UpstreamEndpoint::Upload => write!(f, "upload"),
        }
    }
}

/// Any failure while locating an upload server or uploading to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("{endpoint} request timed out")]
    Timeout { endpoint: UpstreamEndpoint },

    #[error("{endpoint} request failed: {detail}")]
    Transport {
        endpoint: UpstreamEndpoint,
        detail: String,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    HttpStatus {
        endpoint: UpstreamEndpoint,
        status: u16,
        body: String,
    },

    #[error("{endpoint} failed: {body}")]
    Rejected {
        endpoint: UpstreamEndpoint,
        body: String,
    },

    #[error("{endpoint} returned an unexpected body ({detail}): {body}")]
    MalformedBody {
        endpoint: UpstreamEndpoint,
        detail: String,
        body: String,
    },

    #[error("Failed to obtain a link from the hosting service.")]
    MissingLink,
}

impl UpstreamError {
    pub fn endpoint(&self) -> Option<UpstreamEndpoint> {
        match self {
            UpstreamError::Timeout { endpoint }
            | UpstreamError::Transport { endpoint, .. }
            | UpstreamError::HttpStatus { endpoint, .. }
            | UpstreamError::Rejected { endpoint, .. }
            | UpstreamError::MalformedBody { endpoint, .. } => Some(*endpoint),
            UpstreamError::MissingLink => None,
        }
    }
}
