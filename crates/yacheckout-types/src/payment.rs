use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::receipt::{Receipt, ReceiptStatus};

/// Payment lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    WaitingForCapture,
    Succeeded,
    Canceled,
    #[serde(untagged)]
    Other(String),
}

/// Payment method codes accepted in `payment_method_data.type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    Alfabank,
    MobileBalance,
    BankCard,
    Installments,
    Cash,
    B2bSberbank,
    Sberbank,
    TinkoffBank,
    YandexMoney,
    ApplePay,
    GooglePay,
    Qiwi,
    Wechat,
    Webmoney,
    #[serde(untagged)]
    Other(String),
}

/// Card brand reported in `payment_method.card.card_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    MasterCard,
    Visa,
    Mir,
    UnionPay,
    #[serde(rename = "JCB")]
    Jcb,
    AmericanExpress,
    DinersClub,
    /// The service itself could not determine the brand.
    Unknown,
    #[serde(untagged)]
    Other(String),
}

/// Who declined a canceled payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationParty {
    YandexCheckout,
    PaymentNetwork,
    Merchant,
    #[serde(untagged)]
    Other(String),
}

/// Why a payment was canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    #[serde(rename = "3d_secure_failed")]
    ThreeDSecureFailed,
    CallIssuer,
    CardExpired,
    CountryForbidden,
    FraudSuspected,
    GeneralDecline,
    IdentificationRequired,
    InsufficientFunds,
    InvalidCardNumber,
    InvalidCsc,
    IssuerUnavailable,
    PaymentMethodLimitExceeded,
    PaymentMethodRestricted,
    PermissionRevoked,
    #[serde(untagged)]
    Other(String),
}

/// User confirmation scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationType {
    Redirect,
    External,
    Embedded,
    Qr,
    MobileApplication,
    #[serde(untagged)]
    Other(String),
}

/// Payment object. Used both as the creation/capture request body and as the
/// response; the service fills in whatever it owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<Receipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Requestor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refundable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_registration: Option<ReceiptStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_payment_method: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    /// Free-form key/value pairs echoed back by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_details: Option<CancellationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_details: Option<AuthorizationDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<Airline>,
}

/// `payment.recipient`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub gateway_id: String,
}

/// Initiator of a payment or refund (`merchant` or `third_party_client`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requestor {
    #[serde(rename = "type")]
    pub requestor_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

/// `payment.payment_method` / `payment.payment_method_data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_bank_details: Option<PayerBankDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_data: Option<VatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Apple Pay / Google Pay token blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_token: Option<String>,
}

impl PaymentMethod {
    /// A method with only `type` set, as used in `payment_method_data`.
    pub fn of_type(method_type: PaymentMethodType) -> Self {
        Self {
            method_type,
            id: None,
            saved: None,
            title: None,
            login: None,
            phone: None,
            card: None,
            payer_bank_details: None,
            payment_purpose: None,
            vat_data: None,
            account_number: None,
            payment_data: None,
            google_transaction_id: None,
            payment_method_token: None,
        }
    }
}

/// Bank card. Requests carry the full number; responses carry `first6`/`last4`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub expiry_year: String,
    pub expiry_month: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Payer organization details for `b2b_sberbank` payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerBankDetails {
    pub full_name: String,
    pub short_name: String,
    pub address: String,
    pub inn: String,
    pub kpp: String,
    pub bank_name: String,
    pub bank_branch: String,
    pub bank_bik: String,
    pub account: String,
}

/// VAT details for `b2b_sberbank` payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatData {
    /// `calculated`, `mixed` or `untaxed`.
    #[serde(rename = "type")]
    pub vat_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(rename = "type")]
    pub confirmation_type: ConfirmationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

impl Confirmation {
    /// Redirect confirmation returning the payer to `return_url`.
    pub fn redirect(return_url: impl Into<String>) -> Self {
        Self {
            confirmation_type: ConfirmationType::Redirect,
            confirmation_data: None,
            locale: None,
            confirmation_url: None,
            enforce: None,
            return_url: Some(return_url.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationDetails {
    pub party: CancellationParty,
    pub reason: CancellationReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
}

/// Airline ticket details attached to a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passengers: Vec<Passenger>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// IATA code.
    pub departure_airport: String,
    pub destination_airport: String,
    pub departure_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_code: Option<String>,
}
