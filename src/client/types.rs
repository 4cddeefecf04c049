//! Public data types for the Kraken API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire::string_or_number;

// ── Core types ──────────────────────────────────────────────────────────────

/// Channel metadata.
///
/// `email` and `stream_key` are only returned for the channel owning the
/// OAuth token (`GET /channel`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub mature: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub broadcaster_language: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub video_banner: Option<String>,
    #[serde(default)]
    pub profile_banner: Option<String>,
    #[serde(default)]
    pub profile_banner_background_color: Option<String>,
    #[serde(default)]
    pub partner: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub stream_key: Option<String>,
}

/// User profile.
///
/// The trailing optional fields are only present on `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub partnered: Option<bool>,
    #[serde(default)]
    pub twitter_connected: Option<bool>,
    #[serde(default)]
    pub notifications: Option<NotificationSettings>,
}

/// Notification preferences of the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub email: bool,
}

/// A follow relationship between a user and a channel.
///
/// Channel follower listings carry `user`; a user's followed channels
/// carry `channel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Follow {
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, String>,
    #[serde(default)]
    pub notifications: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub channel: Option<Channel>,
}

/// A paid subscription to a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub sub_plan: Option<String>,
    pub user: User,
}

/// A post on a channel feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub emotes: Vec<serde_json::Value>,
    #[serde(default)]
    pub body: String,
    pub user: User,
}

/// Preview image URLs for a live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

/// A live stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    #[serde(rename = "_id")]
    pub id: u64,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub community_id: Option<String>,
    #[serde(default)]
    pub viewers: u64,
    #[serde(default)]
    pub video_height: u32,
    #[serde(default)]
    pub average_fps: f64,
    #[serde(default)]
    pub delay: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_playlist: bool,
    #[serde(default)]
    pub preview: Option<Preview>,
    pub channel: Channel,
}

/// Channel summary embedded in a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoChannel {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A past broadcast, highlight or upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub broadcast_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub views: u64,
    /// Duration in seconds.
    #[serde(default)]
    pub length: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub channel: Option<VideoChannel>,
}

/// Chat roster grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chatters {
    #[serde(default)]
    pub moderators: Vec<String>,
    #[serde(default)]
    pub staff: Vec<String>,
    #[serde(default)]
    pub admins: Vec<String>,
    #[serde(default)]
    pub global_mods: Vec<String>,
    #[serde(default)]
    pub viewers: Vec<String>,
}

impl Chatters {
    /// Every login in the roster, regardless of role.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.moderators
            .iter()
            .chain(&self.staff)
            .chain(&self.admins)
            .chain(&self.global_mods)
            .chain(&self.viewers)
            .map(String::as_str)
    }
}

// ── Response types ──────────────────────────────────────────────────────────

/// Response from the follow listing endpoints.
///
/// `cursor` is only set by cursor-paged endpoints; an empty or missing
/// cursor marks the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowsPage {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(rename = "_cursor", default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub follows: Vec<Follow>,
}

impl FollowsPage {
    /// Cursor for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}

/// Response from `GET /channels/{id}/subscriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionsPage {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

/// Response from `GET /feed/{id}/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsPage {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(rename = "_cursor", default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Response from `GET /channels/{id}/videos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideosPage {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(default)]
    pub videos: Vec<Video>,
}

/// Response from `GET /streams/{channel}`.
///
/// `stream` is `None` while the channel is offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamResponse {
    #[serde(default)]
    pub stream: Option<Stream>,
}

/// Response from `GET /streams/followed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowedStreams {
    #[serde(rename = "_total", default)]
    pub total: u64,
    #[serde(default)]
    pub streams: Vec<Stream>,
}

/// Response from the chat roster endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatterResponse {
    #[serde(default)]
    pub chatter_count: u64,
    #[serde(default)]
    pub chatters: Chatters,
}
