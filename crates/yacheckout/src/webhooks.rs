//! Webhook subscription management. The service only accepts these calls
//! with OAuth (bearer) credentials.

use uuid::Uuid;
use yacheckout_types::{Webhook, Webhooks};

use crate::client::{escape, Checkout};
use crate::error::CheckoutError;
use crate::transport::HttpTransport;

impl<T: HttpTransport> Checkout<T> {
    /// `POST webhooks`
    pub async fn create_webhook(
        &self,
        idempotence_key: &Uuid,
        webhook: &Webhook,
    ) -> Result<Webhook, CheckoutError> {
        self.post_json(idempotence_key, "webhooks", webhook).await
    }

    /// `GET webhooks`
    pub async fn get_webhooks(&self) -> Result<Webhooks, CheckoutError> {
        self.get_json("webhooks").await
    }

    /// `DELETE webhooks/{id}`
    pub async fn delete_webhook(&self, id: &str) -> Result<(), CheckoutError> {
        self.delete(&format!("webhooks/{}", escape(id)?)).await
    }
}
