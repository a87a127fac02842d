use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::matching::domain::{
    Candidate, Category, RequestId, RequesterProfile, ScoredCandidate,
};
use crate::matching::explain::{ExplanationClient, ExplanationError};
use crate::matching::repository::{ProfileStore, StoreError};
use crate::matching::service::{CoachMatchingService, MatchingConfig};
use crate::matching::match_router;

pub(super) fn requester() -> RequesterProfile {
    RequesterProfile {
        category: Some(Category::Esports),
        game: Some("Valorant".to_string()),
        role: Some("Duelist".to_string()),
        skill_level: Some("Intermediate".to_string()),
        location: Some("Mumbai".to_string()),
        playstyle: Some("Aggressive entry".to_string()),
        target_gaps: Some("Inconsistent aim under pressure".to_string()),
    }
}

pub(super) fn coach(id: &str, name: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        category: Some(Category::Esports),
        specialty: Some("Valorant Duelist coach".to_string()),
        description: Some("Entry fragging and aim mechanics".to_string()),
        location: Some("Mumbai".to_string()),
        experience: Some("5 years".to_string()),
    }
}

pub(super) fn coaches() -> Vec<Candidate> {
    vec![
        coach("coach-a", "Arjun Mehta"),
        Candidate {
            id: "coach-b".to_string(),
            name: "Priya Nair".to_string(),
            category: Some(Category::Esports),
            specialty: Some("BGMI squad strategy".to_string()),
            description: Some("Zone rotations and scrim reviews".to_string()),
            location: Some("Bengaluru".to_string()),
            experience: Some("4 years".to_string()),
        },
        Candidate {
            id: "coach-c".to_string(),
            name: "Rohit Sharma".to_string(),
            category: Some(Category::Sports),
            specialty: Some("Cricket batting technique".to_string()),
            description: Some("Footwork and match temperament".to_string()),
            location: Some("Mumbai".to_string()),
            experience: Some("10 years".to_string()),
        },
        Candidate {
            id: "coach-d".to_string(),
            name: "Dev Kapoor".to_string(),
            category: Some(Category::Esports),
            specialty: Some("Valorant Controller coaching".to_string()),
            description: Some("Smokes and post-plant discipline".to_string()),
            location: Some("Pune".to_string()),
            experience: Some("3 years".to_string()),
        },
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    requests: Arc<Mutex<HashMap<String, RequesterProfile>>>,
    coaches: Arc<Mutex<Vec<Candidate>>>,
}

impl MemoryStore {
    pub(super) fn with_fixtures() -> Self {
        let store = Self::default();
        store.insert_request("REQ_001", requester());
        store.insert_coaches(coaches());
        store
    }

    pub(super) fn insert_request(&self, id: impl Into<String>, profile: RequesterProfile) {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .insert(id.into(), profile);
    }

    pub(super) fn insert_coaches(&self, candidates: Vec<Candidate>) {
        self.coaches
            .lock()
            .expect("coach mutex poisoned")
            .extend(candidates);
    }
}

impl ProfileStore for MemoryStore {
    fn get_requester(&self, id: &RequestId) -> Result<Option<RequesterProfile>, StoreError> {
        let guard = self.requests.lock().expect("request mutex poisoned");
        Ok(guard.get(&id.0).cloned())
    }

    fn get_candidate(&self, id: &str) -> Result<Option<Candidate>, StoreError> {
        let guard = self.coaches.lock().expect("coach mutex poisoned");
        Ok(guard.iter().find(|candidate| candidate.id == id).cloned())
    }

    fn list_candidates(
        &self,
        category: Option<Category>,
        limit: usize,
    ) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.coaches.lock().expect("coach mutex poisoned");
        Ok(guard
            .iter()
            .filter(|candidate| match category {
                Some(category) => candidate.category == Some(category),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn get_requester(&self, _id: &RequestId) -> Result<Option<RequesterProfile>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn get_candidate(&self, _id: &str) -> Result<Option<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_candidates(
        &self,
        _category: Option<Category>,
        _limit: usize,
    ) -> Result<Vec<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

#[derive(Clone)]
pub(super) struct StaticExplainer(pub(super) &'static str);

impl ExplanationClient for StaticExplainer {
    async fn explain(
        &self,
        _requester: &RequesterProfile,
        _top_matches: &[ScoredCandidate],
    ) -> Result<String, ExplanationError> {
        Ok(self.0.to_string())
    }
}

#[derive(Default)]
pub(super) struct FailingExplainer {
    pub(super) calls: AtomicU32,
}

impl ExplanationClient for FailingExplainer {
    async fn explain(
        &self,
        _requester: &RequesterProfile,
        _top_matches: &[ScoredCandidate],
    ) -> Result<String, ExplanationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ExplanationError::EmptyCompletion)
    }
}

pub(super) struct SlowExplainer {
    pub(super) delay: Duration,
}

impl ExplanationClient for SlowExplainer {
    async fn explain(
        &self,
        _requester: &RequesterProfile,
        _top_matches: &[ScoredCandidate],
    ) -> Result<String, ExplanationError> {
        tokio::time::sleep(self.delay).await;
        Ok("too late".to_string())
    }
}

pub(super) fn build_service(
) -> CoachMatchingService<MemoryStore, StaticExplainer> {
    CoachMatchingService::new(
        Arc::new(MemoryStore::with_fixtures()),
        Arc::new(StaticExplainer("Pick the first coach.")),
        MatchingConfig::default(),
    )
}

pub(super) fn match_router_with_service(
    service: CoachMatchingService<MemoryStore, StaticExplainer>,
) -> axum::Router {
    match_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
