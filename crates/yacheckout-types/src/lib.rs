//! Wire types for the Yandex.Checkout v3 REST API.
//!
//! Every struct here mirrors a documented JSON resource one-to-one. Absent
//! fields are `Option`s that are skipped on serialization, so "not provided"
//! never turns into a zero value on the wire. Monetary values use
//! [`rust_decimal::Decimal`], which travels as a JSON string (`"100.50"`).
//!
//! Value tables the service may extend (statuses, payment methods,
//! cancellation reasons, ...) are enums with an `Other(String)` catch-all.
//!
//! ```
//! use rust_decimal::Decimal;
//! use yacheckout_types::{Amount, Payment};
//!
//! let payment = Payment {
//!     amount: Some(Amount::new(Decimal::new(10050, 2), "RUB")),
//!     description: Some("Order #72".to_string()),
//!     ..Default::default()
//! };
//! let json = serde_json::to_string(&payment).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"amount":{"value":"100.50","currency":"RUB"},"description":"Order #72"}"#
//! );
//! ```

pub mod amount;
pub mod constants;
pub mod error;
pub mod me;
pub mod payment;
pub mod receipt;
pub mod refund;
pub mod webhook;

pub use amount::Amount;
pub use constants::*;
pub use error::ApiError;
pub use me::Me;
pub use payment::*;
pub use receipt::*;
pub use refund::*;
pub use webhook::*;

pub use rust_decimal::Decimal;
