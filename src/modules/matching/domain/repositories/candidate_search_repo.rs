use async_trait::async_trait;

use crate::{
    modules::matching::domain::entities::CandidateRecord, shared::errors::AppResult,
};

/// Repository interface for the remote profile directory
/// This defines the contract for the free-text candidate search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateSearchRepository: Send + Sync {
    /// Search the directory; results come back in the directory's own order.
    /// An empty list is a valid answer, not an error.
    async fn search_candidates(&self, query: &str) -> AppResult<Vec<CandidateRecord>>;
}
