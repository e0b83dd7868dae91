use std::time::Duration;
use yacheckout_types::API_ENDPOINT;

use crate::credentials::Credentials;
use crate::error::CheckoutError;

/// Client configuration, normally read from `YACHECKOUT_*` environment variables.
#[derive(Clone)]
pub struct CheckoutConfig {
    pub shop_id: u64,
    pub secret_key: Option<String>,
    pub oauth_token: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
}

impl CheckoutConfig {
    pub fn from_env() -> Result<Self, CheckoutError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CheckoutConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let shop_id = non_empty("YACHECKOUT_SHOP_ID")
            .ok_or_else(|| CheckoutError::Config("YACHECKOUT_SHOP_ID is required".to_string()))?
            .parse::<u64>()
            .map_err(|e| CheckoutError::Config(format!("YACHECKOUT_SHOP_ID: {e}")))?;

        let secret_key = non_empty("YACHECKOUT_SECRET_KEY");
        let oauth_token = non_empty("YACHECKOUT_OAUTH_TOKEN");
        if secret_key.is_none() && oauth_token.is_none() {
            return Err(CheckoutError::Config(
                "set YACHECKOUT_SECRET_KEY or YACHECKOUT_OAUTH_TOKEN".to_string(),
            ));
        }

        let mut api_url =
            non_empty("YACHECKOUT_API_URL").unwrap_or_else(|| API_ENDPOINT.to_string());
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        let timeout_secs = match non_empty("YACHECKOUT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| CheckoutError::Config(format!("YACHECKOUT_TIMEOUT_SECS: {e}")))?,
            None => 30,
        };

        Ok(Self {
            shop_id,
            secret_key,
            oauth_token,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.shop_id,
            self.secret_key.clone().unwrap_or_default(),
            self.oauth_token.clone(),
        )
    }

    /// `reqwest` client with the configured timeout and redirects disabled.
    pub fn http_client(&self) -> Result<reqwest::Client, CheckoutError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| CheckoutError::Config(format!("failed to build HTTP client: {e}")))
    }
}

impl std::fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("shop_id", &self.shop_id)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("oauth_token", &self.oauth_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::AuthMode;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_basic_config() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            ("YACHECKOUT_SHOP_ID", "54401"),
            ("YACHECKOUT_SECRET_KEY", "test_secret"),
        ]))
        .unwrap();

        assert_eq!(config.shop_id, 54401);
        assert_eq!(config.api_url, API_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.credentials().mode(), AuthMode::Basic);
    }

    #[test]
    fn test_oauth_only_config() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            ("YACHECKOUT_SHOP_ID", "54401"),
            ("YACHECKOUT_OAUTH_TOKEN", "AQAAAAAA"),
            ("YACHECKOUT_API_URL", "http://127.0.0.1:8080/api/v3"),
            ("YACHECKOUT_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.credentials().mode(), AuthMode::Bearer);
        assert_eq!(config.api_url, "http://127.0.0.1:8080/api/v3/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.http_client().is_ok());
    }

    #[test]
    fn test_missing_shop_id() {
        let err = CheckoutConfig::from_lookup(lookup(&[("YACHECKOUT_SECRET_KEY", "s")]))
            .unwrap_err();
        assert!(err.to_string().contains("YACHECKOUT_SHOP_ID"));
    }

    #[test]
    fn test_non_numeric_shop_id() {
        let err = CheckoutConfig::from_lookup(lookup(&[
            ("YACHECKOUT_SHOP_ID", "shop-1"),
            ("YACHECKOUT_SECRET_KEY", "s"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CheckoutError::Config(_)));
    }

    #[test]
    fn test_requires_some_credential() {
        let err = CheckoutConfig::from_lookup(lookup(&[
            ("YACHECKOUT_SHOP_ID", "1"),
            ("YACHECKOUT_OAUTH_TOKEN", "  "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("YACHECKOUT_SECRET_KEY"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = CheckoutConfig::from_lookup(lookup(&[
            ("YACHECKOUT_SHOP_ID", "1"),
            ("YACHECKOUT_SECRET_KEY", "live_abcdef"),
        ]))
        .unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("live_abcdef"));
        assert!(printed.contains("<redacted>"));
    }
}
