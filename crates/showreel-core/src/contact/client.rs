use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::models::{ContactAck, ContactSubmission};
use super::ContactSubmitter;
use crate::{Error, Result};

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Submits the form to a remote contact endpoint
pub struct ContactClient {
    client: Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ContactSubmitter for ContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck> {
        debug!(endpoint = %self.endpoint, "Posting contact submission");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(status = status.as_u16(), reason = %reason, "Contact endpoint rejected submission");
            return Err(Error::Submission(reason));
        }

        Ok(response.json::<ContactAck>().await?)
    }
}
