use serde::{Deserialize, Serialize};

/// Games/sports with a dedicated questionnaire and override scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Valorant,
    Bgmi,
    Cricket,
    Football,
}

impl Game {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "valorant" => Some(Game::Valorant),
            "bgmi" => Some(Game::Bgmi),
            "cricket" => Some(Game::Cricket),
            "football" => Some(Game::Football),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Game::Valorant => "valorant",
            Game::Bgmi => "bgmi",
            Game::Cricket => "cricket",
            Game::Football => "football",
        }
    }
}

/// One submitted answer: either a 1-10 self rating or a selected phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssessmentAnswer {
    Rating(u8),
    Choice(String),
}

/// Normalized score for one questionnaire parameter, always in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterScore {
    pub question: u8,
    pub name: String,
    pub score: u8,
}

/// Discrete bucket assigned from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Elite,
    Advanced,
    Intermediate,
    Beginner,
    Novice,
}

impl SkillLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            SkillLevel::Elite
        } else if score >= 80 {
            SkillLevel::Advanced
        } else if score >= 65 {
            SkillLevel::Intermediate
        } else if score >= 45 {
            SkillLevel::Beginner
        } else {
            SkillLevel::Novice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Elite => "Elite",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Novice => "Novice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

/// Targeted or general training suggestion derived from the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub area: String,
    pub priority: Priority,
    pub action: String,
}

/// Unweighted scores grouped into four broad skill dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub technical: u8,
    pub tactical: u8,
    pub physical: u8,
    pub mental: u8,
}

/// Aggregate assessment output, recomputed deterministically from the
/// submitted answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub game: Option<Game>,
    pub overall_score: u8,
    pub skill_level: SkillLevel,
    pub parameter_scores: Vec<ParameterScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub skill_breakdown: SkillBreakdown,
}
