use serde::{Deserialize, Serialize};

use crate::error::{MeepleError, Result};

pub const MAX_USER_ID_LENGTH: usize = 128;

/// Opaque identifier for a catalog game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn generate() -> Self {
        Self(nanoid::nanoid!())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier for a user. Supplied by the caller; never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse a caller-supplied user id. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MeepleError::Validation("User id cannot be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_USER_ID_LENGTH {
            return Err(MeepleError::Validation(format!(
                "User id exceeds maximum length of {MAX_USER_ID_LENGTH} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub total_items: u32,
}

impl Pagination {
    pub fn new(limit: u32, offset: u32, total_items: u32) -> Self {
        Self {
            limit,
            offset,
            total_items,
        }
    }

    /// Offset of the next page, or `None` when this page reaches the end.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.offset.saturating_add(self.limit);
        (next < self.total_items).then_some(next)
    }
}
