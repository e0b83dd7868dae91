use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount. `value` is serialized as a JSON string to keep its scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: Decimal,
    /// ISO-4217 code, e.g. `RUB`.
    pub currency: String,
}

impl Amount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_a_string_with_scale_preserved() {
        let amount = Amount::new(Decimal::new(10050, 2), "RUB");
        let json = serde_json::to_value(&amount).unwrap();

        assert_eq!(json["value"], serde_json::json!("100.50"));
        assert_eq!(json["currency"], "RUB");
    }

    #[test]
    fn test_parse_string_value() {
        let amount: Amount =
            serde_json::from_str(r#"{"value":"2.00","currency":"RUB"}"#).unwrap();
        assert_eq!(amount.value, Decimal::new(200, 2));
        assert_eq!(amount.value.to_string(), "2.00");
    }
}
