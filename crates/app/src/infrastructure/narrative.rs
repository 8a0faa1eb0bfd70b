//! Narrative service client.
//!
//! Implements the NarrativePort trait against the remote narrative
//! endpoint. One request per call, no retries; callers decide what a
//! failure means.

use std::time::Duration;

use async_trait::async_trait;
use mojomint_domain::WalletAddress;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{NarrativePort, RemoteServiceError};

const SERVICE: &str = "narrative";

/// Client for the narrative update/finalize/reset endpoints.
#[derive(Clone)]
pub struct NarrativeHttpClient {
    client: Client,
    base_url: String,
}

impl NarrativeHttpClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_empty(&self, url: String) -> Result<reqwest::Response, RemoteServiceError> {
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| RemoteServiceError::transport(SERVICE, e))?;
        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RemoteServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(RemoteServiceError::status(SERVICE, status.as_u16(), body));
    }
    Ok(response)
}

#[async_trait]
impl NarrativePort for NarrativeHttpClient {
    async fn update(&self, user: &WalletAddress, answer: &str) -> Result<(), RemoteServiceError> {
        let request = UpdateRequest { answer };
        let response = self
            .client
            .post(format!("{}/narrative/update/{}", self.base_url, user))
            .json(&request)
            .send()
            .await
            .map_err(|e| RemoteServiceError::transport(SERVICE, e))?;

        check_status(response).await?;
        Ok(())
    }

    async fn finalize(&self, user: &WalletAddress) -> Result<String, RemoteServiceError> {
        let response = self
            .post_empty(format!("{}/narrative/finalize/{}", self.base_url, user))
            .await?;

        let body = response
            .text()
            .await
            .map_err(|e| RemoteServiceError::malformed(SERVICE, e))?;
        let parsed: FinalizeResponse = serde_json::from_str(&body)
            .map_err(|e| RemoteServiceError::malformed(SERVICE, e))?;

        // The service answers with either {data:{narrativeText}} or a
        // bare {response} string.
        let text = parsed
            .data
            .and_then(|d| d.narrative_text)
            .or(parsed.response);
        match text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(RemoteServiceError::missing_field(
                SERVICE,
                "narrativeText",
                body,
            )),
        }
    }

    async fn reset(&self, user: &WalletAddress) -> Result<(), RemoteServiceError> {
        self.post_empty(format!("{}/narrative/reset/{}", self.base_url, user))
            .await?;
        Ok(())
    }
}

// =============================================================================
// Narrative API types
// =============================================================================

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct FinalizeResponse {
    data: Option<FinalizeData>,
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinalizeData {
    narrative_text: Option<String>,
}
