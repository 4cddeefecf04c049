//! Channel endpoints.

use super::KrakenClient;
use super::error::Error;
use super::query::{limit_cursor, limit_offset};
use super::types::{Channel, FollowsPage, PostsPage, SubscriptionsPage, User, VideosPage};
use super::wire::EditorsResponse;

impl KrakenClient {
    /// Get the channel owning the given OAuth token.
    ///
    /// Unlike [`channel`](Self::channel), the result includes `email` and
    /// `stream_key`.
    pub async fn channel_by_oauth(&self, oauth: &str) -> Result<Channel, Error> {
        self.get_json_auth(&["channel"], oauth).await
    }

    /// Get a channel by ID.
    pub async fn channel(&self, channel_id: &str) -> Result<Channel, Error> {
        self.get_json(&["channels", channel_id]).await
    }

    /// List the editors of a channel.
    ///
    /// Requires a token from the channel owner.
    pub async fn channel_editors(
        &self,
        channel_id: &str,
        oauth: &str,
    ) -> Result<Vec<User>, Error> {
        let resp: EditorsResponse = self
            .get_json_auth(&["channels", channel_id, "editors"], oauth)
            .await?;
        Ok(resp.users)
    }

    /// Get one page of users following a channel.
    ///
    /// Pass `None` for the first page, then the cursor from the previous
    /// page. An empty [`FollowsPage::next_cursor`] means the list is done.
    /// `limit` must be between 1 and 100.
    pub async fn channel_follows(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<FollowsPage, Error> {
        let params = limit_cursor(limit, cursor)?;
        self.get_json_query(&["channels", channel_id, "follows"], &params)
            .await
    }

    /// Get one page of a channel's subscribers.
    ///
    /// Requires a token from the channel owner with subscription scope.
    pub async fn channel_subscriptions(
        &self,
        channel_id: &str,
        oauth: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SubscriptionsPage, Error> {
        let params = limit_offset(limit, offset)?;
        self.get_json_query_auth(
            &["channels", channel_id, "subscriptions"],
            &params,
            oauth,
        )
        .await
    }

    /// Get one page of a channel's videos.
    pub async fn channel_videos(
        &self,
        channel_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<VideosPage, Error> {
        let params = limit_offset(limit, offset)?;
        self.get_json_query(&["channels", channel_id, "videos"], &params)
            .await
    }

    /// Get one page of posts from a channel feed.
    pub async fn channel_feed_posts(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<PostsPage, Error> {
        let params = limit_cursor(limit, cursor)?;
        self.get_json_query(&["feed", channel_id, "posts"], &params)
            .await
    }
}
