//! Internal wire types for serde deserialization.
//!
//! These types match the raw JSON envelopes from the Kraken API
//! and are not exposed publicly.

use serde::{Deserialize, Deserializer};

use super::types::{Channel, User};

// ── Field helpers ───────────────────────────────────────────────────────────

/// Accept an identifier encoded either as a JSON string or a number.
///
/// Older API versions return numeric `_id`s, newer ones quote them.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

// ── Wrapper types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct EditorsResponse {
    // Some API revisions capitalize the key.
    #[serde(alias = "Users")]
    pub users: Vec<User>,
}

#[derive(Deserialize)]
pub(crate) struct UserSearchResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Deserialize)]
pub(crate) struct ChannelSearchResponse {
    #[serde(default)]
    pub channels: Vec<Channel>,
}
