use uuid::Uuid;
use yacheckout_types::{Receipt, Receipts};

use crate::client::{escape, Checkout};
use crate::error::CheckoutError;
use crate::transport::HttpTransport;

/// Which object's receipts to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptFilter<'a> {
    Payment(&'a str),
    Refund(&'a str),
}

impl ReceiptFilter<'_> {
    fn query(&self) -> Result<String, CheckoutError> {
        Ok(match self {
            ReceiptFilter::Payment(id) => format!("payment_id={}", escape(id)?),
            ReceiptFilter::Refund(id) => format!("refund_id={}", escape(id)?),
        })
    }
}

impl<T: HttpTransport> Checkout<T> {
    /// `POST receipts`
    pub async fn create_receipt(
        &self,
        idempotence_key: &Uuid,
        receipt: &Receipt,
    ) -> Result<Receipt, CheckoutError> {
        self.post_json(idempotence_key, "receipts", receipt).await
    }

    /// `GET receipts/{id}`
    pub async fn get_receipt(&self, id: &str) -> Result<Receipt, CheckoutError> {
        self.get_json(&format!("receipts/{}", escape(id)?)).await
    }

    /// `GET receipts?payment_id=...` or `GET receipts?refund_id=...`
    pub async fn get_receipts(
        &self,
        filter: ReceiptFilter<'_>,
    ) -> Result<Receipts, CheckoutError> {
        self.get_json(&format!("receipts?{}", filter.query()?)).await
    }
}
