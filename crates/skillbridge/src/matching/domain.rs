use serde::{Deserialize, Serialize};

/// Identifier wrapper for coaching requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

/// Top-level split between competitive gaming and traditional sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Esports,
    Sports,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Esports => "esports",
            Category::Sports => "sports",
        }
    }
}

/// Profile captured when an athlete asks to be matched with a coach.
///
/// Every field is optional; a missing field simply fails its scoring rule
/// and contributes nothing. Immutable once the request is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequesterProfile {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub playstyle: Option<String>,
    #[serde(default)]
    pub target_gaps: Option<String>,
}

/// Coach profile as maintained in the external profile store. Read-only to
/// the matching pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Rule that contributed points to a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Category,
    Game,
    Location,
    Role,
}

/// Discrete contribution to a match score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: u8,
    pub notes: String,
}

/// Candidate plus the score it earned for one specific request. Derived and
/// ephemeral; recomputed per request, never persisted as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_components: Vec<ScoreComponent>,
}
