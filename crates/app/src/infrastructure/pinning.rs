//! Metadata pinning client.
//!
//! Implements the MetadataPinPort trait against the IPFS pinning
//! endpoint. A 2xx response without a `uri` field is still a failure;
//! the fallback policy lives in the upload coordinator, not here.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mojomint_domain::{NftMetadata, WalletAddress};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{MetadataPinPort, RemoteServiceError};

const SERVICE: &str = "pinning";

/// Client for the metadata pin endpoint.
#[derive(Clone)]
pub struct PinningHttpClient {
    client: Client,
    base_url: String,
}

impl PinningHttpClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MetadataPinPort for PinningHttpClient {
    async fn pin(
        &self,
        metadata: &NftMetadata,
        user: &WalletAddress,
        timestamp: DateTime<Utc>,
    ) -> Result<String, RemoteServiceError> {
        let request = PinRequest {
            metadata,
            user_id: user.as_str(),
            timestamp: timestamp.timestamp_millis(),
        };

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
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

        let parsed: PinResponse =
            serde_json::from_str(&body).map_err(|e| RemoteServiceError::malformed(SERVICE, e))?;

        match parsed.uri {
            Some(uri) if !uri.trim().is_empty() => {
                if let Some(message) = parsed.message {
                    tracing::debug!(%message, "pin service note");
                }
                Ok(uri)
            }
            _ => Err(RemoteServiceError::missing_field(SERVICE, "uri", body)),
        }
    }
}

// =============================================================================
// Pinning API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinRequest<'a> {
    metadata: &'a NftMetadata,
    user_id: &'a str,
    timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    uri: Option<String>,
    message: Option<String>,
}
