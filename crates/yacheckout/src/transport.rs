//! The HTTP seam between the executor and the network.
//!
//! The executor builds an [`ApiRequest`] and hands it to an [`HttpTransport`].
//! TLS, connection pooling, proxies and timeouts belong to the transport;
//! `reqwest::Client` is the stock implementation.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::future::Future;

use crate::error::CheckoutError;

/// A fully built, authenticated request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status and fully buffered body of a response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends one request and buffers the whole response body.
///
/// Implementations must be usable from several tasks at once.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, CheckoutError>> + Send;
}

impl HttpTransport for reqwest::Client {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, CheckoutError> {
        let mut builder = self
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| CheckoutError::Transport(format!("request failed: {e}")))?;

        let status = resp.status();
        // `bytes()` consumes the response, so the connection goes back to the
        // pool (or is closed) whether or not the read succeeds.
        let body = resp
            .bytes()
            .await
            .map_err(|e| CheckoutError::Transport(format!("failed to read response body: {e}")))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
