use base64::Engine;
use reqwest::header::HeaderValue;

use crate::error::CheckoutError;

/// Shop credentials. Read-only once built; safe to share between tasks.
///
/// A non-empty OAuth token always wins over the secret key.
#[derive(Clone)]
pub struct Credentials {
    shop_id: u64,
    secret_key: String,
    oauth_token: Option<String>,
}

/// Authentication scheme selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Basic,
    Bearer,
}

impl Credentials {
    /// Build credentials; an empty `oauth_token` counts as absent.
    pub fn new(shop_id: u64, secret_key: impl Into<String>, oauth_token: Option<String>) -> Self {
        Self {
            shop_id,
            secret_key: secret_key.into(),
            oauth_token: oauth_token.filter(|t| !t.is_empty()),
        }
    }

    /// HTTP Basic with the shop id as username and the secret key as password.
    pub fn basic(shop_id: u64, secret_key: impl Into<String>) -> Self {
        Self::new(shop_id, secret_key, None)
    }

    /// Bearer token issued through the OAuth partner flow.
    pub fn oauth(shop_id: u64, token: impl Into<String>) -> Self {
        Self::new(shop_id, String::new(), Some(token.into()))
    }

    pub fn shop_id(&self) -> u64 {
        self.shop_id
    }

    pub fn mode(&self) -> AuthMode {
        if self.oauth_token.is_some() {
            AuthMode::Bearer
        } else {
            AuthMode::Basic
        }
    }

    /// Value for the `Authorization` header, marked sensitive.
    pub fn authorization(&self) -> Result<HeaderValue, CheckoutError> {
        let raw = match &self.oauth_token {
            Some(token) => format!("Bearer {token}"),
            None => {
                let pair = format!("{}:{}", self.shop_id, self.secret_key);
                format!(
                    "Basic {}",
                    base64::engine::general_purpose::STANDARD.encode(pair)
                )
            }
        };
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|e| CheckoutError::InvalidHeader(format!("authorization: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("shop_id", &self.shop_id)
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_uses_shop_id_as_username() {
        let creds = Credentials::basic(54401, "test_secret");
        assert_eq!(creds.mode(), AuthMode::Basic);

        let header = creds.authorization().unwrap();
        let encoded = header.to_str().unwrap().strip_prefix("Basic ").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"54401:test_secret");
        assert!(header.is_sensitive());
    }

    #[test]
    fn test_token_wins_over_secret() {
        let creds = Credentials::new(54401, "test_secret", Some("oauth-token".to_string()));
        assert_eq!(creds.mode(), AuthMode::Bearer);
        assert_eq!(creds.authorization().unwrap(), "Bearer oauth-token");
    }

    #[test]
    fn test_empty_token_falls_back_to_basic() {
        let creds = Credentials::new(1, "s", Some(String::new()));
        assert_eq!(creds.mode(), AuthMode::Basic);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::new(7, "very-secret", Some("tok-123".to_string()));
        let printed = format!("{creds:?}");
        assert!(!printed.contains("very-secret"));
        assert!(!printed.contains("tok-123"));
        assert!(printed.contains("Bearer"));
    }
}
