//! User endpoints.

use super::KrakenClient;
use super::error::Error;
use super::types::User;
use super::wire::UserSearchResponse;

impl KrakenClient {
    /// Get the user owning the given OAuth token.
    pub async fn user_by_oauth(&self, oauth: &str) -> Result<User, Error> {
        self.get_json_auth(&["user"], oauth).await
    }

    /// Get a user's public profile.
    pub async fn user(&self, name: &str) -> Result<User, Error> {
        self.get_json(&["users", name]).await
    }

    /// Search users by name.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, Error> {
        let params = vec![("query".to_string(), query.to_string())];
        let resp: UserSearchResponse = self
            .get_json_query(&["search", "users"], &params)
            .await?;
        Ok(resp.users)
    }

    /// Search for a user whose name equals `name` exactly.
    pub async fn search_exact_user(&self, name: &str) -> Result<Option<User>, Error> {
        let users = self.search_users(name).await?;
        Ok(users.into_iter().find(|u| u.name == name))
    }
}
