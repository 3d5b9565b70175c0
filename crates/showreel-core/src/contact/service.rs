use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::message::OutgoingMessage;
use super::models::{ContactAck, ContactSubmission};
use super::transport::{select_transport, MessageTransport};
use super::ContactSubmitter;
use crate::config::ContactConfig;
use crate::{Error, Result};

/// In-process contact collaborator: composes the mail and hands it to a transport
pub struct ContactService {
    transport: Arc<dyn MessageTransport>,
    from: String,
    to: String,
}

impl ContactService {
    pub fn new(transport: Arc<dyn MessageTransport>, from: &str, to: &str) -> Self {
        Self {
            transport,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a service using the transport the configuration selects
    pub fn from_config(config: &ContactConfig) -> Result<Self> {
        let transport = select_transport(config)?;
        Ok(Self::new(transport, &config.from, &config.to))
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Handle one submission. Name, email and message must be present.
    pub async fn handle(&self, submission: &ContactSubmission) -> Result<ContactAck> {
        if !submission.has_required_fields() {
            warn!("Rejected contact submission with missing fields");
            return Err(Error::InvalidPayload);
        }

        let message = OutgoingMessage::compose(submission, &self.from, &self.to, Utc::now());
        let receipt = self.transport.send(&message).await?;

        info!(
            transport = self.transport.name(),
            message_id = %receipt.message_id,
            "Contact message sent"
        );

        Ok(ContactAck {
            ok: true,
            id: receipt.message_id,
        })
    }

    /// Handle a raw JSON request body
    pub async fn handle_json(&self, body: &[u8]) -> Result<ContactAck> {
        let submission: ContactSubmission = serde_json::from_slice(body)?;
        self.handle(&submission).await
    }
}

#[async_trait::async_trait]
impl ContactSubmitter for ContactService {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck> {
        self.handle(submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::transport::{DeliveryReceipt, SimulatedTransport};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingMessage>>,
    }

    #[async_trait::async_trait]
    impl MessageTransport for RecordingTransport {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn send(&self, message: &OutgoingMessage) -> Result<DeliveryReceipt> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(DeliveryReceipt {
                message_id: "recorded-1".to_string(),
            })
        }
    }

    struct FailingTransport;

    #[async_trait::async_trait]
    impl MessageTransport for FailingTransport {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn send(&self, _message: &OutgoingMessage) -> Result<DeliveryReceipt> {
            Err(Error::Relay {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", Some("555-0100"), "Booking a retreat for ten.")
    }

    #[tokio::test]
    async fn test_handle_sends_composed_message() {
        let transport = Arc::new(RecordingTransport::default());
        let service = ContactService::new(transport.clone(), "no-reply@example.com", "demo@example.com");

        let ack = service.handle(&submission()).await.unwrap();
        assert_eq!(
            ack,
            ContactAck {
                ok: true,
                id: "recorded-1".to_string()
            }
        );

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Contact: Ada");
        assert_eq!(sent[0].to, "demo@example.com");
        assert_eq!(sent[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_missing_fields_are_invalid_payload() {
        let transport = Arc::new(RecordingTransport::default());
        let service = ContactService::new(transport.clone(), "f", "t");

        let mut incomplete = submission();
        incomplete.message.clear();
        assert!(matches!(service.handle(&incomplete).await, Err(Error::InvalidPayload)));

        let result = service.handle_json(br#"{"name":"Ada","email":"ada@example.com"}"#).await;
        assert!(matches!(result, Err(Error::InvalidPayload)));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_handle_json_rejects_malformed_body() {
        let service = ContactService::new(Arc::new(SimulatedTransport), "f", "t");
        assert!(matches!(service.handle_json(b"{not json").await, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let service = ContactService::new(Arc::new(FailingTransport), "f", "t");
        assert!(matches!(
            service.submit(&submission()).await,
            Err(Error::Relay { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_default_config_simulates() {
        let service = ContactService::from_config(&ContactConfig::default()).unwrap();
        assert_eq!(service.transport_name(), "simulated");
        let ack = service.handle(&submission()).await.unwrap();
        assert!(ack.ok);
        assert!(!ack.id.is_empty());
    }
}
