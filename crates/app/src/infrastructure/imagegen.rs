//! Art generation client.
//!
//! Implements the ImageGenPort trait against the image generation
//! endpoint. The response JSON shape is loose; the client accepts the
//! common field spellings and requires one of them to be present.

use std::time::Duration;

use async_trait::async_trait;
use mojomint_domain::WalletAddress;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{ImageGenPort, RemoteServiceError};

const SERVICE: &str = "imagegen";

/// Client for the art generation endpoint.
#[derive(Clone)]
pub struct ImageGenHttpClient {
    client: Client,
    base_url: String,
}

impl ImageGenHttpClient {
    pub fn new(base_url: &str) -> Self {
        // Generation can be slow; give it a generous timeout.
        let client = Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageGenPort for ImageGenHttpClient {
    async fn generate(
        &self,
        prompt: &str,
        user: &WalletAddress,
    ) -> Result<String, RemoteServiceError> {
        let request = GenerateRequest {
            prompt,
            user_id: user.as_str(),
        };

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| RemoteServiceError::transport(SERVICE, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if !status.is_success() {
            return Err(RemoteServiceError::status(SERVICE, status.as_u16(), body));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| RemoteServiceError::malformed(SERVICE, e))?;

        let image = parsed
            .image
            .or(parsed.url)
            .or(parsed.data.and_then(|d| d.image));
        match image {
            Some(uri) if !uri.trim().is_empty() => Ok(uri),
            _ => Err(RemoteServiceError::missing_field(SERVICE, "image", body)),
        }
    }
}

// =============================================================================
// Image generation API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    prompt: &'a str,
    user_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    image: Option<String>,
    url: Option<String>,
    data: Option<GenerateData>,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    image: Option<String>,
}
