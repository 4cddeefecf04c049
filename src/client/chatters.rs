//! Chat roster endpoint, served from the chat host rather than Kraken.

use super::KrakenClient;
use super::error::Error;
use super::types::ChatterResponse;

impl KrakenClient {
    /// Get the users currently in a channel's chat, grouped by role.
    pub async fn chatters(&self, channel: &str) -> Result<ChatterResponse, Error> {
        self.get_chatters_json(&["group", "user", channel, "chatters"])
            .await
    }
}
