//! Contact form collaborator
//!
//! The form validates and submits a `ContactSubmission` through a
//! `ContactSubmitter`. `ContactService` handles it in-process and
//! `ContactClient` posts it to a remote endpoint that speaks the same JSON.

mod client;
mod form;
mod message;
mod models;
mod service;
mod transport;

use std::sync::Arc;
use std::time::Duration;

pub use client::ContactClient;
pub use form::{ContactForm, FormNotice, FAILED_MESSAGE, SENT_MESSAGE};
pub use message::OutgoingMessage;
pub use models::{ContactAck, ContactField, ContactSubmission, FieldErrors};
pub use service::ContactService;
pub use transport::{select_transport, DeliveryReceipt, MessageTransport, RelayTransport, SimulatedTransport};

use crate::config::ContactConfig;
use crate::Result;

/// Anything that can take a contact submission
#[async_trait::async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<ContactAck>;
}

/// Remote client when an endpoint is configured, in-process service otherwise
pub fn submitter_from_config(config: &ContactConfig) -> Result<Arc<dyn ContactSubmitter>> {
    match config.endpoint.as_deref().map(str::trim) {
        Some(endpoint) if !endpoint.is_empty() => Ok(Arc::new(ContactClient::new(
            endpoint,
            Duration::from_secs(config.request_timeout_secs),
        )?)),
        _ => Ok(Arc::new(ContactService::from_config(config)?)),
    }
}
