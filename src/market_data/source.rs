use async_trait::async_trait;
use thiserror::Error;

use super::types::{Category, PricedInstrument};

/// Failure of a single category fetch.
///
/// The variants distinguish transport, status, and decode failures for the
/// logs; state only ever sees the one collapsed refresh-failure outcome.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport error fetching {category:?}: {source}")]
    Transport {
        category: Category,
        #[source]
        source: reqwest::Error,
    },

    #[error("{category:?} endpoint returned {status}")]
    Status {
        category: Category,
        status: reqwest::StatusCode,
    },

    #[error("malformed body from {category:?} endpoint: {source}")]
    Decode {
        category: Category,
        #[source]
        source: reqwest::Error,
    },
}

impl FeedError {
    /// Which category's fetch failed.
    pub fn category(&self) -> Category {
        match self {
            FeedError::Transport { category, .. }
            | FeedError::Status { category, .. }
            | FeedError::Decode { category, .. } => *category,
        }
    }
}

/// The fetch seam between the refresher and the upstream price API.
///
/// Category-addressed so the refresher can issue the three fetches
/// concurrently against any backend.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch(&self, category: Category) -> Result<Vec<PricedInstrument>, FeedError>;
}
