use uuid::Uuid;
use yacheckout_types::Refund;

use crate::client::{escape, Checkout};
use crate::error::CheckoutError;
use crate::transport::HttpTransport;

impl<T: HttpTransport> Checkout<T> {
    /// `POST refunds`
    pub async fn create_refund(
        &self,
        idempotence_key: &Uuid,
        refund: &Refund,
    ) -> Result<Refund, CheckoutError> {
        self.post_json(idempotence_key, "refunds", refund).await
    }

    /// `GET refunds/{id}`
    pub async fn get_refund(&self, id: &str) -> Result<Refund, CheckoutError> {
        self.get_json(&format!("refunds/{}", escape(id)?)).await
    }
}
