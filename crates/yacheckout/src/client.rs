use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use yacheckout_types::API_ENDPOINT;

use crate::config::CheckoutConfig;
use crate::credentials::Credentials;
use crate::error::CheckoutError;
use crate::executor;
use crate::transport::HttpTransport;

/// Client for one shop.
///
/// Holds the credentials, the API base URL and the transport. Nothing is
/// mutated after construction, so a single instance can serve concurrent
/// calls; give each mutating call its own idempotence key.
pub struct Checkout<T = reqwest::Client> {
    credentials: Credentials,
    base_url: String,
    transport: T,
}

impl Checkout<reqwest::Client> {
    /// Client against the production endpoint with a default `reqwest::Client`.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, reqwest::Client::new())
    }

    /// Client built from [`CheckoutConfig`]: its credentials, base URL and timeout.
    pub fn from_config(config: &CheckoutConfig) -> Result<Self, CheckoutError> {
        Ok(Self::with_transport(config.credentials(), config.http_client()?)
            .with_base_url(config.api_url.clone()))
    }
}

impl<T> Checkout<T> {
    /// Client using a caller-supplied transport.
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            base_url: API_ENDPOINT.to_string(),
            transport,
        }
    }

    /// Override the base URL (sandbox proxies, tests). Paths are appended verbatim.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: HttpTransport> Checkout<T> {
    /// Run a raw request against this client's base URL.
    ///
    /// Escape hatch for endpoints without a typed wrapper; see
    /// [`executor::execute`] for the contract.
    pub async fn exec(
        &self,
        method: Method,
        idempotence_key: Option<&Uuid>,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, CheckoutError> {
        executor::execute(
            &self.transport,
            &self.credentials,
            &self.base_url,
            method,
            idempotence_key,
            path,
            body,
        )
        .await
    }

    pub(crate) async fn get_json<R>(&self, path: &str) -> Result<R, CheckoutError>
    where
        R: DeserializeOwned,
    {
        let bytes = self.exec(Method::GET, None, path, None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn post_json<B, R>(
        &self,
        idempotence_key: &Uuid,
        path: &str,
        body: &B,
    ) -> Result<R, CheckoutError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(body)?;
        let bytes = self
            .exec(Method::POST, Some(idempotence_key), path, Some(body))
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), CheckoutError> {
        self.exec(Method::DELETE, None, path, None).await?;
        Ok(())
    }
}

impl<T> std::fmt::Debug for Checkout<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Percent-encode a caller-supplied id for use as a path segment or query value.
///
/// Empty, `.` and `..` are rejected: they survive encoding and would address
/// a different resource once the URL is normalized.
pub(crate) fn escape(id: &str) -> Result<std::borrow::Cow<'_, str>, CheckoutError> {
    match id {
        "" | "." | ".." => Err(CheckoutError::InvalidId(id.to_string())),
        _ => Ok(urlencoding::encode(id)),
    }
}
