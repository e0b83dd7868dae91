//! Async client for the Yandex.Checkout v3 REST API.
//!
//! Every operation is one authenticated HTTP exchange: serialize the request
//! type, send it through [`executor::execute`], deserialize the response.
//! Failures come back as [`CheckoutError`]; [`CheckoutError::Api`] carries
//! the service's own error body, every other variant is local.
//!
//! # Quick example
//!
//! ```no_run
//! use yacheckout::{new_idempotence_key, Checkout, Credentials};
//! use yacheckout::types::{Amount, Confirmation, Decimal, Payment};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), yacheckout::CheckoutError> {
//! let client = Checkout::new(Credentials::basic(54401, "test_secret"));
//!
//! let request = Payment {
//!     amount: Some(Amount::new(Decimal::new(10050, 2), "RUB")),
//!     capture: Some(true),
//!     confirmation: Some(Confirmation::redirect("https://shop.example/thanks")),
//!     description: Some("Order #72".to_string()),
//!     ..Default::default()
//! };
//!
//! match client.create_payment(&new_idempotence_key(), &request).await {
//!     Ok(payment) => println!("created {:?}", payment.id),
//!     Err(e) => match e.api_error() {
//!         Some(api) => eprintln!("rejected: {} ({:?})", api.code, api.parameter),
//!         None => return Err(e),
//!     },
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod executor;
mod me;
mod payments;
mod receipts;
mod refunds;
pub mod transport;
mod webhooks;

pub use client::Checkout;
pub use config::CheckoutConfig;
pub use credentials::{AuthMode, Credentials};
pub use error::CheckoutError;
pub use executor::{execute, new_idempotence_key};
pub use receipts::ReceiptFilter;
pub use transport::{ApiRequest, ApiResponse, HttpTransport};

pub use yacheckout_types as types;
pub use yacheckout_types::ApiError;
