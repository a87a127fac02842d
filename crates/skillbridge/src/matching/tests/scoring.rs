use super::common::*;

use crate::matching::domain::{Category, MatchFactor, RequesterProfile};
use crate::matching::score::{MatchWeights, ScoreEngine};

#[test]
fn full_alignment_scores_the_cap() {
    let engine = ScoreEngine::default();

    let scored = engine.score(&requester(), &coach("coach-a", "Arjun Mehta"));

    assert_eq!(scored.match_score, 100);
    let factors: Vec<MatchFactor> = scored
        .score_components
        .iter()
        .map(|component| component.factor)
        .collect();
    assert_eq!(
        factors,
        vec![
            MatchFactor::Category,
            MatchFactor::Game,
            MatchFactor::Location,
            MatchFactor::Role
        ]
    );
}

#[test]
fn disjoint_profiles_score_zero() {
    let engine = ScoreEngine::default();
    let mut candidate = coach("coach-x", "Nobody");
    candidate.category = Some(Category::Sports);
    candidate.specialty = Some("Chess openings".to_string());
    candidate.description = Some("Endgame studies".to_string());
    candidate.location = Some("Kolkata".to_string());

    let scored = engine.score(&requester(), &candidate);

    assert_eq!(scored.match_score, 0);
    assert!(scored.score_components.is_empty());
}

#[test]
fn game_and_role_matching_ignores_case() {
    let engine = ScoreEngine::default();
    let mut profile = RequesterProfile {
        game: Some("VALORANT".to_string()),
        role: Some("dUeLiSt".to_string()),
        ..RequesterProfile::default()
    };

    let scored = engine.score(&profile, &coach("coach-a", "Arjun Mehta"));
    assert_eq!(scored.match_score, 40);

    profile.game = Some("valorant".to_string());
    let lowercased = engine.score(&profile, &coach("coach-a", "Arjun Mehta"));
    assert_eq!(lowercased.match_score, scored.match_score);
}

#[test]
fn empty_profile_contributes_nothing() {
    let engine = ScoreEngine::default();

    let scored = engine.score(&RequesterProfile::default(), &coach("coach-a", "Arjun Mehta"));

    assert_eq!(scored.match_score, 0);
    assert!(scored.score_components.is_empty());
}

#[test]
fn whitespace_only_fields_are_treated_as_missing() {
    let engine = ScoreEngine::default();
    let profile = RequesterProfile {
        game: Some("   ".to_string()),
        role: Some(String::new()),
        ..RequesterProfile::default()
    };

    let scored = engine.score(&profile, &coach("coach-a", "Arjun Mehta"));

    assert_eq!(scored.match_score, 0);
}

#[test]
fn location_comparison_is_exact() {
    let engine = ScoreEngine::default();
    let profile = RequesterProfile {
        location: Some("mumbai".to_string()),
        ..RequesterProfile::default()
    };

    let scored = engine.score(&profile, &coach("coach-a", "Arjun Mehta"));

    assert_eq!(scored.match_score, 0, "location rule compares verbatim");
}

#[test]
fn each_added_match_condition_raises_the_score() {
    let engine = ScoreEngine::default();
    let candidate = coach("coach-a", "Arjun Mehta");

    let mut profile = RequesterProfile::default();
    let mut previous = engine.score(&profile, &candidate).match_score;

    let updates: [fn(&mut RequesterProfile); 4] = [
        |p| p.category = Some(Category::Esports),
        |p| p.game = Some("Valorant".to_string()),
        |p| p.location = Some("Mumbai".to_string()),
        |p| p.role = Some("Duelist".to_string()),
    ];
    for update in updates {
        update(&mut profile);
        let current = engine.score(&profile, &candidate).match_score;
        assert!(current > previous, "score must grow as conditions match");
        previous = current;
    }
}

#[test]
fn total_never_exceeds_the_configured_cap() {
    let engine = ScoreEngine::new(MatchWeights {
        category: 60,
        game: 60,
        location: 60,
        role: 60,
        cap: 100,
    });

    let scored = engine.score(&requester(), &coach("coach-a", "Arjun Mehta"));

    assert_eq!(scored.match_score, 100);
    let raw_total: u16 = scored
        .score_components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();
    assert_eq!(raw_total, 240, "components keep the uncapped contributions");
}
