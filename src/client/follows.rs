//! Follow listings and the paginators that walk them.

use std::collections::HashSet;

use super::KrakenClient;
use super::error::Error;
use super::query::{Direction, MAX_LIMIT, SortBy, UserFollowsQuery};
use super::types::{Follow, FollowsPage};

/// Page size used when walking a user's followed channels.
const USER_FOLLOWS_PAGE: u32 = 25;

impl KrakenClient {
    /// Get one page of channels a user follows.
    pub async fn user_follows(
        &self,
        user_id: &str,
        query: UserFollowsQuery,
    ) -> Result<FollowsPage, Error> {
        let params = query.to_params()?;
        self.get_json_query(&["users", user_id, "follows", "channels"], &params)
            .await
    }

    /// Walk a channel's followers one page at a time.
    pub fn channel_follows_pager(&self, channel_id: &str) -> ChannelFollowsPager<'_> {
        ChannelFollowsPager {
            client: self,
            channel_id: channel_id.to_string(),
            cursor: None,
            seen: HashSet::new(),
            done: false,
        }
    }

    /// Fetch every follower of a channel, following cursors to the end.
    pub async fn all_channel_follows(&self, channel_id: &str) -> Result<Vec<Follow>, Error> {
        let mut pager = self.channel_follows_pager(channel_id);
        let mut follows = Vec::new();
        while let Some(page) = pager.next_page().await? {
            follows.extend(page);
        }
        Ok(follows)
    }

    /// Walk the channels a user follows, newest first.
    pub fn user_follows_pager(&self, user_id: &str) -> UserFollowsPager<'_> {
        UserFollowsPager {
            client: self,
            user_id: user_id.to_string(),
            offset: 0,
            done: false,
        }
    }

    /// Fetch every channel a user follows, newest first.
    pub async fn all_user_follows(&self, user_id: &str) -> Result<Vec<Follow>, Error> {
        let mut pager = self.user_follows_pager(user_id);
        let mut follows = Vec::new();
        while let Some(page) = pager.next_page().await? {
            follows.extend(page);
        }
        Ok(follows)
    }
}

// ── Paginators ──────────────────────────────────────────────────────────────

/// Cursor paginator over a channel's followers.
///
/// A failed request leaves the pager on the same page, so calling
/// [`next_page`](Self::next_page) again retries it. The walk ends when the
/// cursor runs out or the server hands back a cursor it already used.
pub struct ChannelFollowsPager<'a> {
    client: &'a KrakenClient,
    channel_id: String,
    cursor: Option<String>,
    seen: HashSet<String>,
    done: bool,
}

impl ChannelFollowsPager<'_> {
    /// Fetch the next page, or `None` once the cursor runs out.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Follow>>, Error> {
        if self.done {
            return Ok(None);
        }
        let page = self
            .client
            .channel_follows(&self.channel_id, self.cursor.as_deref(), MAX_LIMIT)
            .await?;
        let next = page.next_cursor().map(str::to_string);
        tracing::trace!(
            channel_id = %self.channel_id,
            count = page.follows.len(),
            has_next = next.is_some(),
            "channel follows page"
        );

        match next {
            Some(cursor) if self.seen.insert(cursor.clone()) => self.cursor = Some(cursor),
            Some(cursor) => {
                tracing::debug!(channel_id = %self.channel_id, %cursor, "cursor repeated");
                self.done = true;
            }
            None => self.done = true,
        }
        Ok(Some(page.follows))
    }

    /// Whether the last page has been returned.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Offset paginator over the channels a user follows.
pub struct UserFollowsPager<'a> {
    client: &'a KrakenClient,
    user_id: String,
    offset: u32,
    done: bool,
}

impl UserFollowsPager<'_> {
    /// Fetch the next page, or `None` once `_total` is reached.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Follow>>, Error> {
        if self.done {
            return Ok(None);
        }
        let query = UserFollowsQuery::builder()
            .limit(USER_FOLLOWS_PAGE)
            .offset(self.offset)
            .direction(Direction::Desc)
            .sort_by(SortBy::CreatedAt)
            .build();
        let page = self.client.user_follows(&self.user_id, query).await?;
        tracing::trace!(
            user_id = %self.user_id,
            offset = self.offset,
            total = page.total,
            count = page.follows.len(),
            "user follows page"
        );

        if page.follows.is_empty() {
            self.done = true;
            return Ok(None);
        }
        self.offset += USER_FOLLOWS_PAGE;
        if u64::from(self.offset) >= page.total {
            self.done = true;
        }
        Ok(Some(page.follows))
    }

    /// Whether the last page has been returned.
    pub fn is_done(&self) -> bool {
        self.done
    }
}
