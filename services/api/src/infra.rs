use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use skillbridge::error::AppError;
use skillbridge::matching::{
    Candidate, Category, ExplanationClient, ExplanationError, ProfileStore, RequestId,
    RequesterProfile, ScoredCandidate, StoreError,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory stand-in for the external profile store. Coaches keep their
/// insertion order so tie scores rank deterministically.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    requests: Arc<Mutex<HashMap<String, RequesterProfile>>>,
    coaches: Arc<Mutex<Vec<Candidate>>>,
}

impl InMemoryProfileStore {
    pub(crate) fn insert_request(&self, id: impl Into<String>, profile: RequesterProfile) {
        let mut guard = self.requests.lock().expect("request mutex poisoned");
        guard.insert(id.into(), profile);
    }

    pub(crate) fn insert_coaches(&self, candidates: Vec<Candidate>) {
        let mut guard = self.coaches.lock().expect("coach mutex poisoned");
        guard.extend(candidates);
    }
}

impl ProfileStore for InMemoryProfileStore {
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

/// Explanation client that answers with fixed text; used by the demo and
/// by tests so no network is involved.
#[derive(Clone)]
pub(crate) struct StaticExplanationClient {
    text: String,
}

impl StaticExplanationClient {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ExplanationClient for StaticExplanationClient {
    async fn explain(
        &self,
        _requester: &RequesterProfile,
        _top_matches: &[ScoredCandidate],
    ) -> Result<String, ExplanationError> {
        Ok(self.text.clone())
    }
}

/// Seed file layout for `serve --seed` and the demo.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedData {
    pub(crate) coaches: Vec<Candidate>,
    #[serde(default)]
    pub(crate) requests: HashMap<String, RequesterProfile>,
}

pub(crate) fn load_seed(path: &Path) -> Result<SeedData, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let seed = serde_json::from_str(&raw)?;
    Ok(seed)
}

pub(crate) fn sample_coaches() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "coach-001".to_string(),
            name: "Arjun Mehta".to_string(),
            category: Some(Category::Esports),
            specialty: Some("Valorant Duelist coach".to_string()),
            description: Some(
                "Former Radiant player focused on entry fragging and aim mechanics".to_string(),
            ),
            location: Some("Mumbai".to_string()),
            experience: Some("5 years".to_string()),
        },
        Candidate {
            id: "coach-002".to_string(),
            name: "Priya Nair".to_string(),
            category: Some(Category::Esports),
            specialty: Some("BGMI squad strategy".to_string()),
            description: Some("Zone rotations, IGL development, and scrim reviews".to_string()),
            location: Some("Bengaluru".to_string()),
            experience: Some("4 years".to_string()),
        },
        Candidate {
            id: "coach-003".to_string(),
            name: "Rohit Sharma".to_string(),
            category: Some(Category::Sports),
            specialty: Some("Cricket batting technique".to_string()),
            description: Some("Opening batsman drills, footwork, and match temperament".to_string()),
            location: Some("Mumbai".to_string()),
            experience: Some("10 years".to_string()),
        },
        Candidate {
            id: "coach-004".to_string(),
            name: "Sana Qureshi".to_string(),
            category: Some(Category::Sports),
            specialty: Some("Football midfield play".to_string()),
            description: Some("Positional awareness and first-touch training".to_string()),
            location: Some("Delhi".to_string()),
            experience: Some("7 years".to_string()),
        },
        Candidate {
            id: "coach-005".to_string(),
            name: "Dev Kapoor".to_string(),
            category: Some(Category::Esports),
            specialty: Some("Valorant Controller and utility coaching".to_string()),
            description: Some("Site anchoring, smokes, and post-plant discipline".to_string()),
            location: Some("Pune".to_string()),
            experience: Some("3 years".to_string()),
        },
    ]
}

pub(crate) fn sample_requests() -> HashMap<String, RequesterProfile> {
    let mut requests = HashMap::new();
    requests.insert(
        "REQ_001".to_string(),
        RequesterProfile {
            category: Some(Category::Esports),
            game: Some("Valorant".to_string()),
            role: Some("Duelist".to_string()),
            skill_level: Some("Intermediate".to_string()),
            location: Some("Mumbai".to_string()),
            playstyle: Some("Aggressive entry".to_string()),
            target_gaps: Some("Inconsistent aim under pressure".to_string()),
        },
    );
    requests
}
