use super::domain::{Candidate, Category, RequestId, RequesterProfile};

/// Upper bound on the candidate pool fetched per matching request.
pub const CANDIDATE_POOL_LIMIT: usize = 20;

/// Read-only view of the external profile store (document database).
///
/// Profile creation and maintenance belong to the excluded CRUD surface;
/// the matching pipeline only ever reads.
pub trait ProfileStore: Send + Sync {
    fn get_requester(&self, id: &RequestId) -> Result<Option<RequesterProfile>, StoreError>;
    fn get_candidate(&self, id: &str) -> Result<Option<Candidate>, StoreError>;
    fn list_candidates(
        &self,
        category: Option<Category>,
        limit: usize,
    ) -> Result<Vec<Candidate>, StoreError>;
}

/// Error enumeration for profile store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
