//! Authenticated request execution shared by every resource operation.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use uuid::Uuid;
use yacheckout_types::{ApiError, IDEMPOTENCE_KEY_HEADER};

use crate::credentials::Credentials;
use crate::error::CheckoutError;
use crate::transport::{ApiRequest, HttpTransport};

/// Fresh v4 key for a mutating request. Reuse the same key when retrying
/// that request so the service applies it at most once.
pub fn new_idempotence_key() -> Uuid {
    Uuid::new_v4()
}

/// Build the request for `method` against `base_url + path`, without sending it.
///
/// `path` is appended verbatim, so path segments and query values must
/// already be escaped.
pub fn build_request(
    credentials: &Credentials,
    base_url: &str,
    method: Method,
    idempotence_key: Option<&Uuid>,
    path: &str,
    body: Option<Vec<u8>>,
) -> Result<ApiRequest, CheckoutError> {
    let mut headers = HeaderMap::new();
    let json = HeaderValue::from_static("application/json");

    let body = match method {
        Method::GET | Method::DELETE => {
            if body.is_some() {
                return Err(CheckoutError::UnexpectedBody(method.to_string()));
            }
            if method == Method::DELETE {
                headers.insert(CONTENT_TYPE, json);
            }
            None
        }
        Method::POST => {
            let body = body
                .filter(|b| !b.is_empty())
                .ok_or(CheckoutError::MissingBody)?;
            let key = idempotence_key.ok_or(CheckoutError::MissingIdempotenceKey)?;
            let key = HeaderValue::from_str(&key.hyphenated().to_string())
                .map_err(|e| CheckoutError::InvalidHeader(format!("idempotence key: {e}")))?;
            headers.insert(CONTENT_TYPE, json);
            headers.insert(IDEMPOTENCE_KEY_HEADER, key);
            Some(body)
        }
        _ => return Err(CheckoutError::UnsupportedMethod(method.to_string())),
    };

    let url = Url::parse(&format!("{base_url}{path}"))
        .map_err(|e| CheckoutError::InvalidUrl(format!("{base_url}{path}: {e}")))?;

    headers.insert(AUTHORIZATION, credentials.authorization()?);

    Ok(ApiRequest {
        method,
        url,
        headers,
        body,
    })
}

/// Send one authenticated request and return the raw 200 body.
///
/// Any other status is decoded as an [`ApiError`] and returned as
/// [`CheckoutError::Api`]; a body that is not a JSON object becomes
/// [`CheckoutError::ErrorBody`]. Nothing is retried.
pub async fn execute<T>(
    transport: &T,
    credentials: &Credentials,
    base_url: &str,
    method: Method,
    idempotence_key: Option<&Uuid>,
    path: &str,
    body: Option<Vec<u8>>,
) -> Result<Vec<u8>, CheckoutError>
where
    T: HttpTransport + ?Sized,
{
    let request = build_request(credentials, base_url, method, idempotence_key, path, body)?;
    let method = request.method.clone();

    tracing::debug!(method = %method, path, "sending checkout API request");
    let response = transport.send(request).await?;
    tracing::debug!(
        method = %method,
        path,
        status = response.status.as_u16(),
        bytes = response.body.len(),
        "checkout API responded"
    );

    if response.status == StatusCode::OK {
        return Ok(response.body);
    }

    let status = response.status.as_u16();
    match decode_api_error(&response.body) {
        Ok(error) => {
            tracing::warn!(
                status,
                code = %error.code,
                error_id = %error.id,
                parameter = error.parameter.as_deref().unwrap_or(""),
                "checkout API rejected request"
            );
            Err(CheckoutError::Api { status, error })
        }
        Err(source) => {
            tracing::warn!(status, error = %source, "undecodable checkout API error body");
            Err(CheckoutError::ErrorBody { status, source })
        }
    }
}

/// Error bodies must be JSON objects; any field may be missing.
fn decode_api_error(body: &[u8]) -> Result<ApiError, serde_json::Error> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
    serde_json::from_value(serde_json::Value::Object(object))
}
