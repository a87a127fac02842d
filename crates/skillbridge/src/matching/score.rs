use super::domain::{Candidate, MatchFactor, RequesterProfile, ScoreComponent, ScoredCandidate};

/// Additive rule weights for the match scorer.
///
/// The values are product constants carried over unchanged; they are kept as
/// data rather than literals so tuning them requires no code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWeights {
    pub category: u8,
    pub game: u8,
    pub location: u8,
    pub role: u8,
    pub cap: u8,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            category: 40,
            game: 30,
            location: 20,
            role: 10,
            cap: 100,
        }
    }
}

/// Stateless scorer applying the additive match rules to one candidate.
///
/// Substring containment over the candidate's specialty and description text
/// is a cheap proxy for semantic relevance; acceptable for the small pools
/// this pipeline sees (at most [`super::CANDIDATE_POOL_LIMIT`] candidates).
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    weights: MatchWeights,
}

impl ScoreEngine {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> MatchWeights {
        self.weights
    }

    /// Score one candidate against the requester, in `[0, cap]`.
    ///
    /// Missing fields on either side fail their rule and contribute zero;
    /// no input combination is an error.
    pub fn score(&self, requester: &RequesterProfile, candidate: &Candidate) -> ScoredCandidate {
        let mut components = Vec::new();
        let mut total: u16 = 0;

        let candidate_text = format!(
            "{} {}",
            candidate.specialty.as_deref().unwrap_or_default(),
            candidate.description.as_deref().unwrap_or_default()
        )
        .to_lowercase();

        if let (Some(want), Some(have)) = (requester.category, candidate.category) {
            if want == have {
                components.push(ScoreComponent {
                    factor: MatchFactor::Category,
                    points: self.weights.category,
                    notes: format!("category '{}' matches", have.label()),
                });
                total += u16::from(self.weights.category);
            }
        }

        if let Some(game) = non_empty_lowercase(requester.game.as_deref()) {
            if candidate_text.contains(&game) {
                components.push(ScoreComponent {
                    factor: MatchFactor::Game,
                    points: self.weights.game,
                    notes: format!("'{game}' appears in specialty/description"),
                });
                total += u16::from(self.weights.game);
            }
        }

        if let (Some(want), Some(have)) = (&requester.location, &candidate.location) {
            if want == have {
                components.push(ScoreComponent {
                    factor: MatchFactor::Location,
                    points: self.weights.location,
                    notes: format!("location '{have}' matches"),
                });
                total += u16::from(self.weights.location);
            }
        }

        if let Some(role) = non_empty_lowercase(requester.role.as_deref()) {
            if candidate_text.contains(&role) {
                components.push(ScoreComponent {
                    factor: MatchFactor::Role,
                    points: self.weights.role,
                    notes: format!("'{role}' appears in specialty/description"),
                });
                total += u16::from(self.weights.role);
            }
        }

        let match_score = total.min(u16::from(self.weights.cap)) as u8;

        ScoredCandidate {
            candidate: candidate.clone(),
            match_score,
            score_components: components,
        }
    }
}

fn non_empty_lowercase(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}
