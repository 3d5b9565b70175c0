use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

use super::message::OutgoingMessage;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// Result of handing a message to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// Trait for outgoing mail transports
#[async_trait::async_trait]
pub trait MessageTransport: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Deliver one message
    async fn send(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt>;
}

#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default, alias = "messageId", alias = "message_id")]
    id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP mail relay authenticated with basic auth
pub struct RelayTransport {
    client: Client,
    url: Url,
    username: String,
    password: String,
}

impl RelayTransport {
    pub fn new(url: &str, username: &str, password: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: Url::parse(url)?,
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MessageTransport for RelayTransport {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt> {
        debug!(url = %self.url, subject = %message.subject, "Posting message to relay");

        let response = self
            .client
            .post(self.url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .json(message)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed: Option<RelayResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let message = parsed
                .and_then(|r| r.error)
                .unwrap_or_else(|| body.trim().to_string());
            return Err(Error::Relay {
                status: status.as_u16(),
                message,
            });
        }

        let message_id = parsed
            .and_then(|r| r.id)
            .unwrap_or_else(|| format!("<{}@relay>", Uuid::new_v4()));

        Ok(DeliveryReceipt { message_id })
    }
}

/// Logs the message as JSON instead of sending it
#[derive(Debug, Default)]
pub struct SimulatedTransport;

#[async_trait::async_trait]
impl MessageTransport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt> {
        let payload = serde_json::to_string(message)?;
        let message_id = format!("<{}@showreel.local>", Uuid::new_v4());
        info!(message_id = %message_id, payload = %payload, "Simulated message delivery");
        Ok(DeliveryReceipt { message_id })
    }
}

/// Relay when its URL and credentials are all configured, simulated otherwise
pub fn select_transport(config: &ContactConfig) -> Result<Arc<dyn MessageTransport>> {
    let relay = &config.relay;
    let transport: Arc<dyn MessageTransport> = match (&relay.url, &relay.username, &relay.password) {
        (Some(url), Some(user), Some(pass)) if relay.is_complete() => Arc::new(RelayTransport::new(
            url,
            user,
            pass,
            Duration::from_secs(config.request_timeout_secs),
        )?),
        _ => Arc::new(SimulatedTransport),
    };
    info!(transport = transport.name(), "Contact transport selected");
    Ok(transport)
}
