use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::payment::Requestor;
use crate::receipt::Receipt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Pending,
    Succeeded,
    Canceled,
    #[serde(untagged)]
    Other(String),
}

/// Refund object, used as both request and response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Requestor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RefundStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
}

impl Refund {
    /// Refund request for `amount` of the given payment.
    pub fn new(payment_id: impl Into<String>, amount: Amount) -> Self {
        Self {
            payment_id: payment_id.into(),
            amount: Some(amount),
            ..Default::default()
        }
    }
}
