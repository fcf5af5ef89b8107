use std::time::Duration;

use reqwest::Client;

use crate::config::RatesConfig;

/// HTTP client for the rate service.
#[derive(Clone)]
pub struct RatesClient {
    client: Client,
    url: String,
}

impl RatesClient {
    pub fn new(config: &RatesConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .expect("Failed to build rates client");

        Self {
            client,
            url: config.url(),
        }
    }

    /// Fetches the current rate table body.
    ///
    /// Transport failures (unreachable host, timeout) come back as
    /// `None`. Any HTTP response delivers its body unchanged, whatever
    /// the status; the parser decides what to make of it.
    pub async fn fetch(&self) -> Option<Vec<u8>> {
        match self.get_bytes().await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(error = %err, url = %self.url, "Rates request failed");
                None
            }
        }
    }

    async fn get_bytes(&self) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
