use serde::{Deserialize, Deserializer, Serialize};

/// Shop settings returned by `GET me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    #[serde(deserialize_with = "string_or_number")]
    pub account_id: String,
    pub test: bool,
    pub fiscalization_enabled: bool,
}

// Older API revisions return account_id as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
