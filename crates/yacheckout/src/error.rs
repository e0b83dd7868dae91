use thiserror::Error;
use yacheckout_types::ApiError;

/// Errors returned by client operations.
///
/// [`CheckoutError::Api`] is the remote channel: the exchange completed and
/// the service rejected the request. Every other variant is local: the
/// request could not be built, sent, or its response understood.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("POST requests require a non-empty body")]
    MissingBody,

    #[error("{0} requests must not carry a body")]
    UnexpectedBody(String),

    #[error("POST requests require an idempotence key")]
    MissingIdempotenceKey,

    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} with undecodable error body: {source}")]
    ErrorBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },
}

impl CheckoutError {
    /// The decoded remote error, if the service rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            CheckoutError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True when the failure happened on this side of the wire.
    pub fn is_local(&self) -> bool {
        self.api_error().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_api_error() -> ApiError {
        ApiError {
            error_type: "error".to_string(),
            id: "e1".to_string(),
            code: "invalid_request".to_string(),
            description: "bad amount".to_string(),
            parameter: Some("amount".to_string()),
            retry_after: None,
        }
    }

    #[test]
    fn test_api_variant_is_remote() {
        let err = CheckoutError::Api {
            status: 400,
            error: sample_api_error(),
        };
        assert!(!err.is_local());
        assert_eq!(err.api_error().unwrap().code, "invalid_request");
        assert_eq!(
            err.to_string(),
            "API error (HTTP 400): invalid_request: bad amount"
        );
    }

    #[test]
    fn test_other_variants_are_local() {
        let decode = serde_json::from_str::<ApiError>("<html>").unwrap_err();
        let errors = [
            CheckoutError::UnsupportedMethod("PATCH".to_string()),
            CheckoutError::MissingBody,
            CheckoutError::Transport("connection refused".to_string()),
            CheckoutError::ErrorBody {
                status: 502,
                source: decode,
            },
        ];
        for err in &errors {
            assert!(err.is_local(), "{err} should be local");
            assert!(err.api_error().is_none());
        }
    }
}
