use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::RETRY_AFTER;
use serde::de::DeserializeOwned;

use crate::errors::RiotApiError;

const API_KEY_HEADER: &str = "X-Riot-Token";

/// HTTP client that authenticates every request with the Riot API key
/// and turns non-success statuses into [`RiotApiError`]s
pub struct AuthenticatedClient {
    client: Client,
    api_key: String,
}

impl AuthenticatedClient {
    pub fn new(api_key: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, RiotApiError> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// GET `url` and decode the JSON body; `resource` names the thing in errors
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &str,
    ) -> Result<T, RiotApiError> {
        let response = self.send_get_request(url).await?;
        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let retry_after = Self::retry_after_secs(&response);
            return Err(RiotApiError::from_status(status, retry_after, resource));
        }

        response
            .json::<T>()
            .await
            .map_err(|source| RiotApiError::Decode {
                resource: resource.to_string(),
                source,
            })
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client, RiotApiError> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(RiotApiError::Network)
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response, RiotApiError> {
        self.client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(RiotApiError::Network)
    }

    fn retry_after_secs(response: &reqwest::Response) -> Option<u64> {
        response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }
}
