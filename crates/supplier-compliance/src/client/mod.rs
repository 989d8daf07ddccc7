//! Data-access layer for the remote compliance-management API.
//!
//! | Operation            | Method | Path                          |
//! |----------------------|--------|-------------------------------|
//! | `list_suppliers`     | GET    | `/suppliers`                  |
//! | `get_supplier`       | GET    | `/suppliers/{id}`             |
//! | `get_insights`       | GET    | `/suppliers/insights/{id}`    |
//! | `submit_compliance`  | POST   | `/suppliers/check-compliance` |

mod error;

pub use error::ApiError;

use crate::config::ApiConfig;
use crate::domain::{InsightsResult, Supplier, SupplierId};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Explicitly constructed client bound to one API base endpoint.
///
/// Cloning shares the underlying connection pool; no state is shared between calls.
#[derive(Debug, Clone)]
pub struct ComplianceApiClient {
    http: Client,
    base_url: String,
}

impl ComplianceApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .build()
            .map_err(|err| ApiError::from_transport(&config.base_url, err))?;
        Ok(Self::with_http_client(http, &config.base_url))
    }

    /// Reuse an existing reqwest client, e.g. one shared with other adapters.
    pub fn with_http_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Every supplier, in server order.
    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, ApiError> {
        self.get_json("/suppliers").await
    }

    pub async fn get_supplier(&self, id: SupplierId) -> Result<Supplier, ApiError> {
        self.get_json(&format!("/suppliers/{id}")).await
    }

    /// May trigger expensive server-side generation; never retried or cached here.
    pub async fn get_insights(&self, id: SupplierId) -> Result<InsightsResult, ApiError> {
        self.get_json(&format!("/suppliers/insights/{id}")).await
    }

    /// Post a compliance payload and hand back the server's answer uninterpreted.
    ///
    /// An empty body becomes `Value::Null` and a non-JSON body a `Value::String`.
    pub async fn submit_compliance<P>(&self, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.url("/suppliers/check-compliance");
        let response = self.send(&url, self.http.post(&url).json(payload)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::from_transport(&url, err))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.send(&url, self.http.get(&url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::from_transport(&url, err))?;

        serde_json::from_slice(&bytes).map_err(|err| {
            warn!(%url, error = %err, "compliance api returned an undecodable body");
            ApiError::decode(&url, err)
        })
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!(%url, "compliance api request");
        let response = request.send().await.map_err(|err| {
            let err = ApiError::from_transport(url, err);
            warn!(%url, error = %err, "compliance api request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(%url, error = %err, "could not read error response body");
                String::new()
            }
        };
        warn!(%url, status = status.as_u16(), %body, "compliance api returned an error status");
        Err(ApiError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
