//! Twitch Kraken API client
//!
//! Async client for the Kraken REST API, built on reqwest. Every endpoint
//! goes through a single dispatch routine that sets the client identifier,
//! the versioned accept header and, when given, an OAuth token.

pub mod error;
pub mod query;
pub mod types;
pub(crate) mod wire;

mod channels;
mod chatters;
mod follows;
mod search;
mod streams;
mod users;


use std::time::Duration;

use serde::de::DeserializeOwned;

pub use error::Error;
pub use follows::{ChannelFollowsPager, UserFollowsPager};
pub use query::{Direction, SortBy, UserFollowsQuery, UserFollowsQueryBuilder};
pub use types::*;

/// Production Kraken endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/kraken";

/// Host serving chat rosters.
pub const DEFAULT_CHATTERS_URL: &str = "https://tmi.twitch.tv";

const ACCEPT: &str = "application/vnd.twitchtv.v3+json";
const USER_AGENT: &str = concat!("twitch-kraken/", env!("CARGO_PKG_VERSION"));

// ── Auth ────────────────────────────────────────────────────────────────────

/// A borrowed OAuth token attached to a single request.
#[derive(Clone, Copy)]
pub(crate) struct OAuth<'a>(&'a str);

impl<'a> OAuth<'a> {
    pub(crate) fn new(token: &'a str) -> Self {
        Self(token)
    }

    fn header_value(&self) -> String {
        format!("OAuth {}", self.0)
    }
}

impl std::fmt::Debug for OAuth<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OAuth").field(&"[REDACTED]").finish()
    }
}

// ── Client ──────────────────────────────────────────────────────────────────

/// Async client for the Twitch Kraken REST API.
///
/// Cheap to share behind an `Arc`; the underlying connection pool is
/// owned by reqwest. Dropping a pending call cancels it.
pub struct KrakenClient {
    http: reqwest::Client,
    base_url: reqwest::Url,
    chatters_url: reqwest::Url,
    client_id: String,
}

impl std::fmt::Debug for KrakenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenClient")
            .field("base_url", &self.base_url.as_str())
            .field("chatters_url", &self.chatters_url.as_str())
            .field("client_id", &self.client_id)
            .finish()
    }
}

/// Parse a root URL that endpoint path segments can be appended to.
fn parse_root(url: &str) -> Result<reqwest::Url, Error> {
    let parsed =
        reqwest::Url::parse(url).map_err(|e| Error::InvalidBaseUrl(format!("{url}: {e}")))?;
    if parsed.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(url.to_string()));
    }
    Ok(parsed)
}

/// Human-readable endpoint path, used in logs and `NotFound` errors.
fn display_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

impl KrakenClient {
    /// Create a new client for the given application client ID.
    pub fn new(client_id: &str) -> Result<Self, Error> {
        Self::with_base_url(client_id, DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom base URL (for testing).
    ///
    /// A trailing `/` on the base URL is ignored.
    pub fn with_base_url(client_id: &str, base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: parse_root(base_url)?,
            chatters_url: parse_root(DEFAULT_CHATTERS_URL)?,
            client_id: client_id.to_string(),
        })
    }

    /// Point chat roster lookups at a different host.
    ///
    /// Returns `self` for builder-style chaining.
    pub fn with_chatters_url(mut self, url: &str) -> Result<Self, Error> {
        self.chatters_url = parse_root(url)?;
        Ok(self)
    }

    /// Apply a timeout to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, Error> {
        self.http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(self)
    }

    /// The application client ID sent with every request.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    // ── HTTP helpers ────────────────────────────────────────────────────

    /// Join path segments onto `root`, percent-encoding each segment.
    pub(crate) fn endpoint(root: &reqwest::Url, segments: &[&str]) -> reqwest::Url {
        let mut url = root.clone();
        // `parse_root` rejects URLs that cannot be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a GET request to `root` + `segments` and check the response status.
    async fn dispatch(
        &self,
        root: &reqwest::Url,
        segments: &[&str],
        query: &[(String, String)],
        oauth: Option<OAuth<'_>>,
    ) -> Result<reqwest::Response, Error> {
        let url = Self::endpoint(root, segments);
        tracing::debug!(%url, authenticated = oauth.is_some(), "GET");

        let mut req = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .header("Client-ID", &self.client_id);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(oauth) = oauth {
            req = req.header(reqwest::header::AUTHORIZATION, oauth.header_value());
        }

        let resp = req.send().await.map_err(Error::transport)?;
        Self::check_status(resp, &display_path(segments)).await
    }

    /// Send a GET request against the Kraken base URL.
    pub(crate) async fn send(
        &self,
        segments: &[&str],
        query: &[(String, String)],
        oauth: Option<OAuth<'_>>,
    ) -> Result<reqwest::Response, Error> {
        self.dispatch(&self.base_url, segments, query, oauth).await
    }

    /// Map non-success HTTP status codes to typed errors.
    ///
    /// Every error keeps the response body, which carries the API's reason.
    pub(crate) async fn check_status(
        resp: reqwest::Response,
        path: &str,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        tracing::debug!(status = status.as_u16(), %path, "request failed");
        let message = match resp.text().await {
            Ok(text) => text,
            Err(e) => format!("cannot read body: {e}"),
        };
        Err(match status {
            reqwest::StatusCode::NOT_FOUND => Error::NotFound {
                path: path.to_string(),
                message,
            },
            reqwest::StatusCode::UNAUTHORIZED => Error::Unauthorized(message),
            reqwest::StatusCode::FORBIDDEN => Error::PermissionDenied(message),
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        })
    }

    /// Decode a successful response body as JSON.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let body = resp.bytes().await.map_err(Error::transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T, Error> {
        let resp = self.send(path, &[], None).await?;
        Self::decode(resp).await
    }

    /// GET a JSON resource with query parameters.
    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(String, String)],
    ) -> Result<T, Error> {
        let resp = self.send(path, query, None).await?;
        Self::decode(resp).await
    }

    /// GET a JSON resource with an OAuth token.
    pub(crate) async fn get_json_auth<T: DeserializeOwned>(
        &self,
        path: &[&str],
        oauth: &str,
    ) -> Result<T, Error> {
        let resp = self.send(path, &[], Some(OAuth::new(oauth))).await?;
        Self::decode(resp).await
    }

    /// GET a JSON resource with query parameters and an OAuth token.
    pub(crate) async fn get_json_query_auth<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(String, String)],
        oauth: &str,
    ) -> Result<T, Error> {
        let resp = self.send(path, query, Some(OAuth::new(oauth))).await?;
        Self::decode(resp).await
    }

    /// GET a JSON resource from the chat roster host.
    pub(crate) async fn get_chatters_json<T: DeserializeOwned>(
        &self,
        path: &[&str],
    ) -> Result<T, Error> {
        let resp = self.dispatch(&self.chatters_url, path, &[], None).await?;
        Self::decode(resp).await
    }
}
