//! Webhook subscriptions and the inbound notification envelope.
//!
//! Subscriptions are managed through the API (OAuth credentials only). The
//! notifications the service later POSTs to the subscribed URL are not
//! verified here; [`Notification`] only gives consuming code a typed view of
//! the body it already accepted.

use serde::{Deserialize, Serialize};

use crate::payment::Payment;
use crate::refund::Refund;

/// Event a webhook subscribes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "payment.waiting_for_capture")]
    PaymentWaitingForCapture,
    #[serde(rename = "payment.succeeded")]
    PaymentSucceeded,
    #[serde(rename = "payment.canceled")]
    PaymentCanceled,
    #[serde(rename = "refund.succeeded")]
    RefundSucceeded,
    #[serde(untagged)]
    Other(String),
}

impl WebhookEvent {
    /// True for events whose notification object is a payment.
    pub fn is_payment_event(&self) -> bool {
        match self {
            WebhookEvent::PaymentWaitingForCapture
            | WebhookEvent::PaymentSucceeded
            | WebhookEvent::PaymentCanceled => true,
            WebhookEvent::RefundSucceeded => false,
            WebhookEvent::Other(name) => name.starts_with("payment."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub event: WebhookEvent,
    pub url: String,
}

impl Webhook {
    pub fn new(event: WebhookEvent, url: impl Into<String>) -> Self {
        Self {
            id: None,
            event,
            url: url.into(),
        }
    }
}

/// Response of `GET webhooks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhooks {
    #[serde(rename = "type")]
    pub list_type: String,
    #[serde(default)]
    pub items: Vec<Webhook>,
}

/// Body of an inbound webhook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Always `notification`.
    #[serde(rename = "type")]
    pub notification_type: String,
    pub event: WebhookEvent,
    pub object: serde_json::Value,
}

impl Notification {
    /// Decode `object` as a payment.
    pub fn payment(&self) -> Result<Payment, serde_json::Error> {
        Payment::deserialize(&self.object)
    }

    /// Decode `object` as a refund.
    pub fn refund(&self) -> Result<Refund, serde_json::Error> {
        Refund::deserialize(&self.object)
    }
}
