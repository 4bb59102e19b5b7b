//! Cache value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored cache value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedResponse {
    pub response: String,
    #[serde(default = "Utc::now")]
    pub cached_at: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            cached_at: Utc::now(),
        }
    }
}

/// Outcome of a cache lookup
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit(CachedResponse),
    Miss,
    /// The store could not be consulted
    BackendUnavailable,
}

impl CacheLookup {
    /// Collapse to the cached value, treating an unavailable store as a miss
    pub fn into_hit(self) -> Option<CachedResponse> {
        match self {
            Self::Hit(entry) => Some(entry),
            Self::Miss | Self::BackendUnavailable => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}
