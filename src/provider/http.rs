use super::{decode_payload, AnnouncementProvider};
use crate::errors::{AppError, AppResult};
use crate::models::AnnouncementBatch;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Endpoint served by the SEACE backend in development.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8002/api/contrataciones";

/// Reads announcements with a single GET on a JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpProvider {
    /// Creates a provider for `endpoint` with a default client.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the endpoint cannot be parsed or is not http(s).
    pub fn new(endpoint: &str) -> AppResult<Self> {
        Ok(Self::with_client(reqwest::Client::new(), parse_endpoint(endpoint)?))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Parses an endpoint URL and checks it uses http or https.
pub fn parse_endpoint(endpoint: &str) -> AppResult<Url> {
    let url = Url::parse(endpoint)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::UrlError(format!(
            "Unsupported scheme '{other}' in endpoint {endpoint}"
        ))),
    }
}

#[async_trait]
impl AnnouncementProvider for HttpProvider {
    async fn fetch_announcements(&self) -> AppResult<AnnouncementBatch> {
        debug!(endpoint = %self.endpoint, "Requesting announcements");

        let response = self
            .client
            .get(self.endpoint.as_str())
            .send()
            .await
            .map_err(|e| {
                AppError::NetworkError(format!("Failed to reach {}: {e}", self.endpoint))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ResponseError {
                status: status.as_u16(),
                message: format!(
                    "Error al obtener las contrataciones (HTTP {})",
                    status.as_u16()
                ),
            });
        }

        let body = response.text().await?;

        decode_payload(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
