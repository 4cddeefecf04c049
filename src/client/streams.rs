//! Live stream endpoints.

use super::KrakenClient;
use super::error::Error;
use super::types::{FollowedStreams, StreamResponse};

impl KrakenClient {
    /// Get the live stream of a channel.
    ///
    /// An offline channel is not an error: the returned `stream` is `None`.
    pub async fn stream_by_channel(&self, channel_id: &str) -> Result<StreamResponse, Error> {
        self.get_json(&["streams", channel_id]).await
    }

    /// Get live streams of the channels the token's user follows.
    pub async fn followed_streams(&self, oauth: &str) -> Result<FollowedStreams, Error> {
        self.get_json_auth(&["streams", "followed"], oauth).await
    }
}
