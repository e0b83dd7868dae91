use uuid::Uuid;
use yacheckout_types::Payment;

use crate::client::{escape, Checkout};
use crate::error::CheckoutError;
use crate::transport::HttpTransport;

impl<T: HttpTransport> Checkout<T> {
    /// `POST payments`
    pub async fn create_payment(
        &self,
        idempotence_key: &Uuid,
        payment: &Payment,
    ) -> Result<Payment, CheckoutError> {
        self.post_json(idempotence_key, "payments", payment).await
    }

    /// `GET payments/{id}`
    pub async fn get_payment(&self, id: &str) -> Result<Payment, CheckoutError> {
        self.get_json(&format!("payments/{}", escape(id)?)).await
    }

    /// `POST payments/{id}/capture`. Pass the final amount (and receipt) to
    /// capture less than was authorized; an empty [`Payment`] captures it all.
    pub async fn capture_payment(
        &self,
        idempotence_key: &Uuid,
        id: &str,
        payment: &Payment,
    ) -> Result<Payment, CheckoutError> {
        let path = format!("payments/{}/capture", escape(id)?);
        self.post_json(idempotence_key, &path, payment).await
    }

    /// `POST payments/{id}/cancel`
    pub async fn cancel_payment(
        &self,
        idempotence_key: &Uuid,
        id: &str,
    ) -> Result<Payment, CheckoutError> {
        let path = format!("payments/{}/cancel", escape(id)?);
        self.post_json(idempotence_key, &path, &serde_json::json!({})).await
    }
}
