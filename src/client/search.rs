//! Channel search endpoints.

use super::KrakenClient;
use super::error::Error;
use super::types::Channel;
use super::wire::ChannelSearchResponse;

impl KrakenClient {
    /// Search channels by name or description.
    pub async fn search_channels(&self, query: &str) -> Result<Vec<Channel>, Error> {
        let params = vec![("query".to_string(), query.to_string())];
        let resp: ChannelSearchResponse = self
            .get_json_query(&["search", "channels"], &params)
            .await?;
        Ok(resp.channels)
    }

    /// Search for a channel whose name equals `name` exactly.
    ///
    /// Returns `Ok(None)` when the search has no exact match.
    pub async fn search_exact_channel(&self, name: &str) -> Result<Option<Channel>, Error> {
        let channels = self.search_channels(name).await?;
        Ok(channels.into_iter().find(|c| c.name == name))
    }
}
