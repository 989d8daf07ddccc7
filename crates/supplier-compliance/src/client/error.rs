/// Failure surfaced by every data-access operation.
///
/// Errors are never swallowed by the client; callers decide whether to log, render, or
/// propagate them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("no response received from {url}: {message}")]
    Network { url: String, message: String },
    #[error("server responded with status {status} for {url}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },
    #[error("request to {url} failed: {message}")]
    Unknown { url: String, message: String },
}

impl ApiError {
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        let no_response = !err.is_builder()
            && !err.is_decode()
            && (err.is_connect() || err.is_timeout() || err.is_request() || err.is_body());
        let message = err.without_url().to_string();
        if no_response {
            ApiError::Network {
                url: url.to_string(),
                message,
            }
        } else {
            ApiError::Unknown {
                url: url.to_string(),
                message,
            }
        }
    }

    pub(crate) fn decode(url: &str, err: serde_json::Error) -> Self {
        ApiError::Unknown {
            url: url.to_string(),
            message: format!("invalid response body ({err})"),
        }
    }

    /// HTTP status when the server answered outside the success range.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network { .. } | ApiError::Unknown { .. } => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            ApiError::Network { url, .. }
            | ApiError::Http { url, .. }
            | ApiError::Unknown { url, .. } => url,
        }
    }
}
