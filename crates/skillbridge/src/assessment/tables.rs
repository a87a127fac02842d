//! Lookup tables for questionnaire scoring.
//!
//! These are product constants with no derivable rationale; they are kept as
//! plain data tables so the scorer stays testable and the values tunable
//! without touching logic.

use super::domain::Game;

/// Score assumed for any phrase absent from both tables.
pub const DEFAULT_CHOICE_SCORE: u8 = 50;

/// Per-question weight multiplier. Game sense (8) weighs highest, time
/// commitment (9) lowest.
pub fn question_weight(question: u8) -> f32 {
    match question {
        1 => 1.2,  // Competitive Level
        2 => 1.0,  // Role/Position
        3 => 0.9,  // Experience Duration
        4 => 1.1,  // Performance Output
        5 => 1.0,  // Consistency
        6 => 0.8,  // Strength Area
        7 => 0.8,  // Weakness Area
        8 => 1.3,  // Game Sense
        9 => 0.7,  // Time Commitment
        10 => 1.0, // Intent/Mindset
        _ => 1.0,
    }
}

pub fn parameter_name(question: u8) -> String {
    match question {
        1 => "Competitive Level".to_string(),
        2 => "Role/Position".to_string(),
        3 => "Experience Duration".to_string(),
        4 => "Performance Output".to_string(),
        5 => "Consistency".to_string(),
        6 => "Strength Area".to_string(),
        7 => "Weakness Area".to_string(),
        8 => "Game Sense".to_string(),
        9 => "Time Commitment".to_string(),
        10 => "Intent/Mindset".to_string(),
        other => format!("Parameter {other}"),
    }
}

/// Shared phrase table covering known option wordings across all games.
static BASE_CHOICE_SCORES: &[(&str, u8)] = &[
    // Competitive level
    ("Iron/Bronze (Beginner)", 20),
    ("Silver/Gold (Intermediate)", 40),
    ("Platinum/Diamond (Advanced)", 60),
    ("Ascendant/Immortal (Expert)", 80),
    ("Radiant (Professional)", 100),
    ("Bronze/Silver (Beginner)", 20),
    ("Gold/Platinum (Intermediate)", 40),
    ("Diamond/Crown (Advanced)", 60),
    ("Ace/Conqueror (Expert)", 80),
    ("Top 500 Conqueror (Professional)", 100),
    ("School/College Level", 30),
    ("Club/City Level", 45),
    ("District/State Level", 65),
    ("National Level", 85),
    ("International/Professional", 100),
    // Experience duration
    ("Less than 6 months", 20),
    ("6 months - 1 year", 40),
    ("1-2 years", 60),
    ("2-3 years", 80),
    ("3+ years", 100),
    ("Less than 2 years", 30),
    ("2-5 years", 50),
    ("5-10 years", 70),
    ("10-15 years", 85),
    ("15+ years", 100),
    // Performance output
    ("Below 150 (Needs improvement)", 25),
    ("150-200 (Average)", 45),
    ("200-250 (Good)", 65),
    ("250-300 (Excellent)", 85),
    ("300+ (Exceptional)", 100),
    ("Below 200 (Needs improvement)", 25),
    ("200-400 (Average)", 45),
    ("400-600 (Good)", 65),
    ("600-800 (Excellent)", 85),
    ("800+ (Exceptional)", 100),
    // Consistency
    ("Very inconsistent (up & down)", 20),
    ("Somewhat inconsistent", 40),
    ("Moderately consistent", 60),
    ("Highly consistent", 80),
    ("Extremely consistent (top level always)", 100),
    // Time commitment
    ("Less than 5 hours", 20),
    ("5-10 hours", 40),
    ("10-15 hours", 60),
    ("15-20 hours", 80),
    ("20+ hours", 100),
    ("Less than 10 hours", 30),
    ("10-20 hours", 50),
    ("20-30 hours", 70),
    ("30-40 hours", 85),
    ("40+ hours", 100),
    // Intent/mindset
    ("Casual enjoyment with friends", 30),
    ("Casual fun with friends", 30),
    ("Recreational enjoyment", 30),
    ("Recreational fitness", 30),
    ("Improve personal skills", 50),
    ("Improve personal rank", 50),
    ("Improve skills", 50),
    ("Reach higher rank", 70),
    ("Build tournament experience", 70),
    ("Represent higher level", 70),
    ("Play at higher level", 70),
    ("Join competitive team", 85),
    ("Professional contract", 85),
    ("Go professional", 100),
    ("Professional esports career", 100),
    ("National team selection", 100),
];

static VALORANT_CHOICE_SCORES: &[(&str, u8)] = &[
    ("Duelist Entry Fragger", 75),
    ("Initiator Information Gatherer", 70),
    ("Controller Site Anchor", 65),
    ("Sentinel Defensive Anchor", 60),
    ("Flexible Fill Player", 80),
];

static BGMI_CHOICE_SCORES: &[(&str, u8)] = &[
    ("Aggressive Rusher", 70),
    ("Strategic Rotator", 75),
    ("Support Player", 60),
    ("Sniper/Long-range", 65),
    ("Flexible Adaptor", 80),
];

static CRICKET_CHOICE_SCORES: &[(&str, u8)] = &[
    ("Opening Batsman", 75),
    ("Middle Order Batsman", 70),
    ("Bowler (Pace/Spin)", 75),
    ("All-rounder", 85),
    ("Wicket-keeper/Batsman", 80),
];

static FOOTBALL_CHOICE_SCORES: &[(&str, u8)] = &[
    ("Goalkeeper", 70),
    ("Defender (CB/LB/RB)", 65),
    ("Midfielder (CDM/CM/CAM)", 75),
    ("Winger (LW/RW)", 70),
    ("Striker/Forward", 80),
];

fn game_choice_scores(game: Game) -> &'static [(&'static str, u8)] {
    match game {
        Game::Valorant => VALORANT_CHOICE_SCORES,
        Game::Bgmi => BGMI_CHOICE_SCORES,
        Game::Cricket => CRICKET_CHOICE_SCORES,
        Game::Football => FOOTBALL_CHOICE_SCORES,
    }
}

/// Resolve a selected phrase to its score: base table first, then the
/// game-specific override table, then the permissive default.
pub fn choice_score(game: Option<Game>, answer: &str) -> u8 {
    if let Some((_, score)) = BASE_CHOICE_SCORES
        .iter()
        .find(|(phrase, _)| *phrase == answer)
    {
        return *score;
    }

    if let Some(game) = game {
        if let Some((_, score)) = game_choice_scores(game)
            .iter()
            .find(|(phrase, _)| *phrase == answer)
        {
            return *score;
        }
    }

    DEFAULT_CHOICE_SCORE
}

/// Skill dimension each question feeds into for the breakdown view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkillDimension {
    Technical,
    Tactical,
    Physical,
    Mental,
}

pub(crate) fn skill_dimension(question: u8) -> Option<SkillDimension> {
    match question {
        1 | 2 | 4 | 6 | 7 => Some(SkillDimension::Technical),
        8 => Some(SkillDimension::Tactical),
        9 => Some(SkillDimension::Physical),
        3 | 5 | 10 => Some(SkillDimension::Mental),
        _ => None,
    }
}

/// Default improvement action per parameter, with game-specific overrides.
pub fn improvement_action(game: Option<Game>, question: u8) -> &'static str {
    if let Some(game) = game {
        let specific = match (game, question) {
            (Game::Valorant, 8) => {
                Some("Watch professional Valorant tournaments and analyze rotations")
            }
            (Game::Valorant, 4) => Some("Use tracking apps to monitor ACS and K/D ratio"),
            (Game::Bgmi, 8) => Some("Study zone rotations and positioning strategies"),
            (Game::Bgmi, 5) => Some("Focus on consistent drop locations and loot routes"),
            (Game::Cricket, 4) => {
                Some("Maintain detailed performance records for batting/bowling")
            }
            (Game::Cricket, 8) => Some("Study match situations and decision making"),
            (Game::Football, 8) => Some("Analyze professional matches and tactical formations"),
            (Game::Football, 9) => Some("Increase training frequency and intensity"),
            _ => None,
        };
        if let Some(action) = specific {
            return action;
        }
    }

    match question {
        1 => "Focus on competitive play and tournament participation",
        2 => "Study professional players in your role",
        3 => "Gain more competitive experience",
        4 => "Track and analyze your performance metrics",
        5 => "Develop consistent practice routines",
        6 => "Refine and specialize in your strengths",
        7 => "Targeted practice on weak areas",
        8 => "Study game theory and watch professional matches",
        9 => "Increase dedicated practice time",
        10 => "Set clear goals and develop winning mindset",
        _ => "Practice and review regularly",
    }
}

/// General training suggestions appended after the targeted ones.
pub fn general_recommendations(game: Game) -> &'static [&'static str] {
    match game {
        Game::Valorant => &[
            "Practice aim training for 30 minutes daily",
            "Review professional match VODs weekly",
            "Master 2-3 agents in your role",
            "Work on communication and callouts",
            "Study map callouts and rotations",
        ],
        Game::Bgmi => &[
            "Practice loot management in early game",
            "Master 2-3 weapon combinations",
            "Work on zone prediction and rotations",
            "Improve close-range combat skills",
            "Practice vehicle control and positioning",
        ],
        Game::Cricket => &[
            "Focus on technical skill refinement",
            "Practice specific shots/bowling variations",
            "Work on fitness and agility",
            "Study match situations and decision making",
            "Improve mental game and concentration",
        ],
        Game::Football => &[
            "Work on weak foot accuracy",
            "Improve physical conditioning",
            "Practice positional awareness",
            "Study tactical formations",
            "Work on first touch and ball control",
        ],
    }
}
