//! Query builders and parameter validation.

use super::error::Error;

/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 100;

/// Ensure a page size is within `1..=100`.
pub(crate) fn validate_limit(limit: u32) -> Result<u32, Error> {
    if limit == 0 || limit > MAX_LIMIT {
        Err(Error::InvalidLimit(limit))
    } else {
        Ok(limit)
    }
}

/// Sort direction for follow listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Sort key for a user's followed channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    CreatedAt,
    LastBroadcast,
    Login,
}

impl SortBy {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::LastBroadcast => "last_broadcast",
            SortBy::Login => "login",
        }
    }
}

/// Query parameters for `GET /users/{id}/follows/channels`.
#[derive(Debug, Clone, Default)]
pub struct UserFollowsQuery {
    pub(crate) limit: Option<u32>,
    pub(crate) offset: Option<u32>,
    pub(crate) direction: Option<Direction>,
    pub(crate) sort_by: Option<SortBy>,
}

impl UserFollowsQuery {
    /// Create a new query builder.
    pub fn builder() -> UserFollowsQueryBuilder {
        UserFollowsQueryBuilder {
            query: UserFollowsQuery::default(),
        }
    }

    /// Render the set fields as query pairs, validating the limit.
    pub(crate) fn to_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut params: Vec<(String, String)> = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit".into(), validate_limit(limit)?.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".into(), offset.to_string()));
        }
        if let Some(direction) = self.direction {
            params.push(("direction".into(), direction.as_str().into()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sortby".into(), sort_by.as_str().into()));
        }
        Ok(params)
    }
}

/// Builder for [`UserFollowsQuery`].
pub struct UserFollowsQueryBuilder {
    query: UserFollowsQuery,
}

impl UserFollowsQueryBuilder {
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.query.offset = Some(offset);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.query.direction = Some(direction);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.query.sort_by = Some(sort_by);
        self
    }

    pub fn build(self) -> UserFollowsQuery {
        self.query
    }
}

/// Build `limit`/`offset` pairs shared by the offset-paged endpoints.
pub(crate) fn limit_offset(limit: u32, offset: u32) -> Result<Vec<(String, String)>, Error> {
    Ok(vec![
        ("limit".into(), validate_limit(limit)?.to_string()),
        ("offset".into(), offset.to_string()),
    ])
}

/// Build `limit`/`cursor` pairs; an empty cursor is treated as absent.
pub(crate) fn limit_cursor(
    limit: u32,
    cursor: Option<&str>,
) -> Result<Vec<(String, String)>, Error> {
    let mut params = vec![("limit".into(), validate_limit(limit)?.to_string())];
    if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
        params.push(("cursor".into(), cursor.to_string()));
    }
    Ok(params)
}
