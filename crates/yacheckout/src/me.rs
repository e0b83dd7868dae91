use yacheckout_types::Me;

use crate::client::Checkout;
use crate::error::CheckoutError;
use crate::transport::HttpTransport;

impl<T: HttpTransport> Checkout<T> {
    /// `GET me`
    pub async fn get_me(&self) -> Result<Me, CheckoutError> {
        self.get_json("me").await
    }
}
