// src/domain/article/search.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which article field a keyword search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchType {
    Title,
    Content,
    /// Login id of the author.
    Id,
    Nickname,
    Hashtag,
}

impl SearchType {
    pub const ALL: [SearchType; 5] = [
        SearchType::Title,
        SearchType::Content,
        SearchType::Id,
        SearchType::Nickname,
        SearchType::Hashtag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Title => "TITLE",
            SearchType::Content => "CONTENT",
            SearchType::Id => "ID",
            SearchType::Nickname => "NICKNAME",
            SearchType::Hashtag => "HASHTAG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchType::Title => "Title",
            SearchType::Content => "Content",
            SearchType::Id => "User ID",
            SearchType::Nickname => "Nickname",
            SearchType::Hashtag => "Hashtag",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown search type: {needle}")))
    }
}
