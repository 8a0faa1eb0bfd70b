//! Token reward client.
//!
//! Implements the RewardPort trait against the token reward endpoint.
//! Called after a confirmed mint; the caller treats failure as
//! log-and-continue.

use std::time::Duration;

use async_trait::async_trait;
use mojomint_domain::{MojoScore, NarrativePath, TxHash, WalletAddress};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{RemoteServiceError, RewardPort};

const SERVICE: &str = "reward";

/// Client for the token reward endpoint.
#[derive(Clone)]
pub struct RewardHttpClient {
    client: Client,
    base_url: String,
}

impl RewardHttpClient {
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
impl RewardPort for RewardHttpClient {
    async fn award(
        &self,
        address: &WalletAddress,
        mojo: MojoScore,
        path: NarrativePath,
    ) -> Result<TxHash, RemoteServiceError> {
        let request = RewardRequest {
            address: address.as_str(),
            mojo_score: mojo.value(),
            narrative_path: path.key(),
        };

        let response = self
            .client
            .post(format!("{}/reward", self.base_url))
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

        let parsed: RewardResponse =
            serde_json::from_str(&body).map_err(|e| RemoteServiceError::malformed(SERVICE, e))?;

        match parsed.tx_hash {
            Some(hash) if !hash.trim().is_empty() => Ok(TxHash::new(hash)),
            _ => Err(RemoteServiceError::missing_field(SERVICE, "txHash", body)),
        }
    }
}

// =============================================================================
// Reward API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RewardRequest<'a> {
    address: &'a str,
    mojo_score: u32,
    narrative_path: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RewardResponse {
    tx_hash: Option<String>,
}
