use crate::models::{CandidateQuery, CandidateRecord};
use std::future::Future;
use thiserror::Error;

/// Errors a candidate source can report
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("candidate store unavailable: {0}")]
    Unavailable(String),

    #[error("candidate query failed: {0}")]
    QueryFailed(String),
}

/// Contract the engine requires from its storage collaborator
///
/// Implementations must return every stored record whose category equals the
/// query's, whose creation time is at or after `created_after`, and whose id
/// differs from the exclusion id when one is present. Ordering is
/// unspecified: the engine sorts. Distance filtering is deliberately NOT part
/// of this contract; the distance gate belongs to the engine.
pub trait CandidateSource: Send + Sync {
    fn fetch_candidates(
        &self,
        query: &CandidateQuery,
    ) -> impl Future<Output = Result<Vec<CandidateRecord>, FetchError>> + Send;
}
