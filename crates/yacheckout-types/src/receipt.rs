use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptType {
    Payment,
    Refund,
    #[serde(untagged)]
    Other(String),
}

/// Registration status of a receipt (also `payment.receipt_registration`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Pending,
    Succeeded,
    Canceled,
    #[serde(untagged)]
    Other(String),
}

/// Subject of calculation for a receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSubject {
    Commodity,
    Excise,
    Job,
    Service,
    GamblingBet,
    GamblingPrize,
    Lottery,
    LotteryPrize,
    IntellectualActivity,
    Payment,
    AgentCommission,
    PropertyRight,
    NonOperatingGain,
    InsurancePremium,
    SalesTax,
    ResortFee,
    Composite,
    Another,
    #[serde(untagged)]
    Other(String),
}

/// Method of calculation for a receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    FullPrepayment,
    PartialPrepayment,
    Advance,
    FullPayment,
    PartialPayment,
    Credit,
    CreditPayment,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    Cashless,
    Prepayment,
    Postpayment,
    Consideration,
    #[serde(untagged)]
    Other(String),
}

/// Fiscal receipt. Embedded in payments and refunds, or created standalone
/// through `POST receipts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub receipt_type: Option<ReceiptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReceiptStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_storage_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Always sent, even when empty.
    #[serde(default)]
    pub items: Vec<Item>,
    /// One of the [`crate::tax_system`] codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_system_code: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settlements: Vec<Settlement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub description: String,
    pub quantity: Decimal,
    pub amount: Amount,
    /// One of the [`crate::vat_code`] codes.
    pub vat_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_subject: Option<PaymentSubject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<PaymentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_declaration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excise: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    #[serde(rename = "type")]
    pub settlement_type: SettlementType,
    pub amount: Amount,
}

/// Response of `GET receipts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipts {
    #[serde(rename = "type")]
    pub list_type: String,
    #[serde(default)]
    pub items: Vec<Receipt>,
}
