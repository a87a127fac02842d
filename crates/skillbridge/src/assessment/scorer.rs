use std::collections::BTreeMap;

use super::domain::{
    AssessmentAnswer, AssessmentResult, Game, ParameterScore, Priority, Recommendation,
    SkillBreakdown, SkillLevel,
};
use super::tables::{
    choice_score, general_recommendations, improvement_action, parameter_name, question_weight,
    skill_dimension, SkillDimension,
};

const STRENGTH_THRESHOLD: u8 = 75;
const WEAKNESS_THRESHOLD: u8 = 60;
const RECOMMENDATION_THRESHOLD: u8 = 70;
const MAX_INSIGHTS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 8;

/// Compute the full assessment result for one submitted questionnaire.
///
/// Pure and deterministic: identical answers always produce identical
/// results, and no answer content can make it fail.
pub fn compute_result(
    game: Option<Game>,
    answers: &BTreeMap<u8, AssessmentAnswer>,
) -> AssessmentResult {
    let parameter_scores: Vec<ParameterScore> = answers
        .iter()
        .map(|(&question, answer)| ParameterScore {
            question,
            name: parameter_name(question),
            score: weighted_score(game, question, answer),
        })
        .collect();

    let overall_score = overall(&parameter_scores);
    let skill_level = SkillLevel::from_score(overall_score);
    let strengths = strengths(&parameter_scores);
    let weaknesses = weaknesses(&parameter_scores);
    let insights = insights(game, answers, &parameter_scores, overall_score);
    let recommendations = recommendations(game, &parameter_scores);
    let skill_breakdown = breakdown(game, answers);

    AssessmentResult {
        game,
        overall_score,
        skill_level,
        parameter_scores,
        strengths,
        weaknesses,
        insights,
        recommendations,
        skill_breakdown,
    }
}

/// Raw answer score before weighting: ratings scale to 0-100, phrases go
/// through the lookup tables.
fn raw_score(game: Option<Game>, answer: &AssessmentAnswer) -> u8 {
    match answer {
        AssessmentAnswer::Rating(rating) => (*rating).clamp(1, 10) * 10,
        AssessmentAnswer::Choice(phrase) => choice_score(game, phrase),
    }
}

fn weighted_score(game: Option<Game>, question: u8, answer: &AssessmentAnswer) -> u8 {
    let raw = f32::from(raw_score(game, answer));
    let weighted = (raw * question_weight(question)).round();
    weighted.clamp(0.0, 100.0) as u8
}

fn overall(parameter_scores: &[ParameterScore]) -> u8 {
    if parameter_scores.is_empty() {
        return 0;
    }
    let sum: u32 = parameter_scores
        .iter()
        .map(|parameter| u32::from(parameter.score))
        .sum();
    let average = sum as f32 / parameter_scores.len() as f32;
    average.round().clamp(0.0, 100.0) as u8
}

fn strengths(parameter_scores: &[ParameterScore]) -> Vec<String> {
    let mut strong: Vec<&ParameterScore> = parameter_scores
        .iter()
        .filter(|parameter| parameter.score >= STRENGTH_THRESHOLD)
        .collect();
    strong.sort_by(|a, b| b.score.cmp(&a.score));
    strong
        .into_iter()
        .take(3)
        .map(|parameter| parameter.name.clone())
        .collect()
}

fn weaknesses(parameter_scores: &[ParameterScore]) -> Vec<String> {
    let mut weak: Vec<&ParameterScore> = parameter_scores
        .iter()
        .filter(|parameter| parameter.score < WEAKNESS_THRESHOLD)
        .collect();
    weak.sort_by(|a, b| a.score.cmp(&b.score));
    weak.into_iter()
        .take(3)
        .map(|parameter| parameter.name.clone())
        .collect()
}

fn choice_text<'a>(answers: &'a BTreeMap<u8, AssessmentAnswer>, question: u8) -> Option<&'a str> {
    match answers.get(&question) {
        Some(AssessmentAnswer::Choice(text)) => Some(text.as_str()),
        _ => None,
    }
}

fn insights(
    game: Option<Game>,
    answers: &BTreeMap<u8, AssessmentAnswer>,
    parameter_scores: &[ParameterScore],
    overall_score: u8,
) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(
        if overall_score < 30 {
            "Beginner detected - Focus on foundational skills"
        } else if overall_score < 60 {
            "Intermediate level - Time to refine techniques"
        } else if overall_score < 80 {
            "Advanced player - Polish specialized skills"
        } else {
            "Elite level - Master the nuances of the game"
        }
        .to_string(),
    );

    match game {
        Some(Game::Valorant) => {
            if choice_text(answers, 1).is_some_and(|text| text.contains("Radiant")) {
                insights.push(
                    "Professional level detected - Consider coaching opportunities".to_string(),
                );
            }
            if choice_text(answers, 10) == Some("Go professional") {
                insights.push(
                    "Professional aspirations - Structured training program needed".to_string(),
                );
            }
        }
        Some(Game::Bgmi) => {
            if choice_text(answers, 5).is_some_and(|text| text.contains("Extremely consistent")) {
                insights.push("High consistency - Ready for tournament play".to_string());
            }
            if choice_text(answers, 2) == Some("Aggressive Rusher") {
                insights
                    .push("Aggressive playstyle - Work on positioning and rotations".to_string());
            }
        }
        Some(Game::Cricket) => {
            if choice_text(answers, 4).is_some_and(|text| text.contains("Batting Avg 50+")) {
                insights
                    .push("Excellent batting average - Potential for higher levels".to_string());
            }
            if choice_text(answers, 2) == Some("All-rounder") {
                insights.push("Versatile player - Valuable asset for any team".to_string());
            }
        }
        Some(Game::Football) => {
            if choice_text(answers, 4).is_some_and(|text| text.contains("Star player")) {
                insights.push("Key player detected - Leadership skills important".to_string());
            }
            if choice_text(answers, 6).is_some_and(|text| text.contains("Leadership/Communication"))
            {
                insights.push("Strong leadership skills - Captain material".to_string());
            }
        }
        None => {}
    }

    for parameter in parameter_scores {
        if parameter.score < 40 {
            insights.push(format!(
                "Focus needed on {} (Low score: {}/100)",
                parameter.name, parameter.score
            ));
        }
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

fn recommendations(game: Option<Game>, parameter_scores: &[ParameterScore]) -> Vec<Recommendation> {
    let mut weak: Vec<&ParameterScore> = parameter_scores
        .iter()
        .filter(|parameter| parameter.score < RECOMMENDATION_THRESHOLD)
        .collect();
    weak.sort_by(|a, b| a.score.cmp(&b.score));

    let mut recommendations: Vec<Recommendation> = weak
        .into_iter()
        .take(3)
        .map(|parameter| Recommendation {
            area: parameter.name.clone(),
            priority: Priority::High,
            action: improvement_action(game, parameter.question).to_string(),
        })
        .collect();

    if let Some(game) = game {
        for action in general_recommendations(game) {
            recommendations.push(Recommendation {
                area: "General".to_string(),
                priority: Priority::Medium,
                action: (*action).to_string(),
            });
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Unweighted scores grouped per skill dimension, divided by three as a
/// rough normalization, then clamped.
fn breakdown(game: Option<Game>, answers: &BTreeMap<u8, AssessmentAnswer>) -> SkillBreakdown {
    let mut technical: u32 = 0;
    let mut tactical: u32 = 0;
    let mut physical: u32 = 0;
    let mut mental: u32 = 0;

    for (&question, answer) in answers {
        let Some(dimension) = skill_dimension(question) else {
            continue;
        };
        let score = u32::from(raw_score(game, answer));
        match dimension {
            SkillDimension::Technical => technical += score,
            SkillDimension::Tactical => tactical += score,
            SkillDimension::Physical => physical += score,
            SkillDimension::Mental => mental += score,
        }
    }

    let normalize = |total: u32| -> u8 { ((total as f32 / 3.0).round() as u32).min(100) as u8 };

    SkillBreakdown {
        technical: normalize(technical),
        tactical: normalize(tactical),
        physical: normalize(physical),
        mental: normalize(mental),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(entries: Vec<(u8, AssessmentAnswer)>) -> BTreeMap<u8, AssessmentAnswer> {
        entries.into_iter().collect()
    }

    fn rating(value: u8) -> AssessmentAnswer {
        AssessmentAnswer::Rating(value)
    }

    fn choice(text: &str) -> AssessmentAnswer {
        AssessmentAnswer::Choice(text.to_string())
    }

    #[test]
    fn perfect_ratings_score_elite() {
        let answers = answers((1..=10).map(|question| (question, rating(10))).collect());
        let result = compute_result(Some(Game::Valorant), &answers);

        assert_eq!(result.overall_score, 100);
        assert_eq!(result.skill_level, SkillLevel::Elite);
        assert!(result
            .parameter_scores
            .iter()
            .all(|parameter| parameter.score == 100));
        assert!(result.weaknesses.is_empty());
        assert_eq!(result.strengths.len(), 3);
    }

    #[test]
    fn weights_amplify_and_dampen_ratings() {
        let answers = answers(vec![(8, rating(7)), (9, rating(7))]);
        let result = compute_result(None, &answers);

        let score_for = |question: u8| {
            result
                .parameter_scores
                .iter()
                .find(|parameter| parameter.question == question)
                .map(|parameter| parameter.score)
                .expect("parameter present")
        };

        // 70 * 1.3 = 91 for game sense, 70 * 0.7 = 49 for time commitment.
        assert_eq!(score_for(8), 91);
        assert_eq!(score_for(9), 49);
    }

    #[test]
    fn weighted_scores_are_capped_at_100() {
        let answers = answers(vec![(1, choice("Radiant (Professional)"))]);
        let result = compute_result(Some(Game::Valorant), &answers);

        // 100 * 1.2 would be 120 without the cap.
        assert_eq!(result.parameter_scores[0].score, 100);
    }

    #[test]
    fn unrecognized_phrases_never_error() {
        let answers = answers(vec![
            (2, choice("some entirely novel playstyle")),
            (5, choice("")),
        ]);
        let result = compute_result(Some(Game::Bgmi), &answers);

        assert!(result.overall_score <= 100);
        assert!(result
            .parameter_scores
            .iter()
            .all(|parameter| parameter.score <= 100));
        // Default 50, weights 1.0 for both questions.
        assert_eq!(result.overall_score, 50);
    }

    #[test]
    fn out_of_range_ratings_clamp_into_bounds() {
        let answers = answers(vec![(3, rating(0)), (4, rating(200))]);
        let result = compute_result(None, &answers);

        for parameter in &result.parameter_scores {
            assert!(parameter.score <= 100);
        }
    }

    #[test]
    fn empty_answers_yield_zero_and_novice() {
        let result = compute_result(None, &BTreeMap::new());
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.skill_level, SkillLevel::Novice);
        assert!(result.parameter_scores.is_empty());
        assert!(result.strengths.is_empty());
        assert!(result.weaknesses.is_empty());
    }

    #[test]
    fn skill_level_buckets_match_thresholds() {
        assert_eq!(SkillLevel::from_score(90), SkillLevel::Elite);
        assert_eq!(SkillLevel::from_score(89), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_score(80), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_score(79), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_score(65), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_score(64), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_score(45), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_score(44), SkillLevel::Novice);
    }

    #[test]
    fn strengths_and_weaknesses_respect_thresholds() {
        let answers = answers(vec![
            (2, rating(9)),  // 90
            (5, rating(8)),  // 80
            (10, rating(8)), // 80
            (3, rating(3)),  // 27
            (6, rating(4)),  // 32
        ]);
        let result = compute_result(None, &answers);

        assert_eq!(
            result.strengths,
            vec!["Role/Position", "Consistency", "Intent/Mindset"]
        );
        assert_eq!(
            result.weaknesses,
            vec!["Experience Duration", "Strength Area"]
        );
    }

    #[test]
    fn insights_flag_low_parameters_and_cap_at_five() {
        let answers = answers((1..=10).map(|question| (question, rating(1))).collect());
        let result = compute_result(None, &answers);

        assert!(result.insights.len() <= 5);
        assert!(result.insights[0].contains("Beginner"));
        assert!(result
            .insights
            .iter()
            .any(|insight| insight.contains("Focus needed on")));
    }

    #[test]
    fn valorant_professional_aspirations_produce_insight() {
        let answers = answers(vec![
            (1, choice("Radiant (Professional)")),
            (10, choice("Go professional")),
        ]);
        let result = compute_result(Some(Game::Valorant), &answers);

        assert!(result
            .insights
            .iter()
            .any(|insight| insight.contains("Professional level detected")));
        assert!(result
            .insights
            .iter()
            .any(|insight| insight.contains("Professional aspirations")));
    }

    #[test]
    fn recommendations_target_weakest_areas_first() {
        let answers = answers(vec![
            (8, rating(2)), // 26 after weighting
            (9, rating(3)), // 21 after weighting
            (1, rating(9)), // 100 capped
        ]);
        let result = compute_result(Some(Game::Valorant), &answers);

        assert!(result.recommendations.len() <= 8);
        assert_eq!(result.recommendations[0].priority, Priority::High);
        assert_eq!(result.recommendations[0].area, "Time Commitment");
        assert_eq!(result.recommendations[1].area, "Game Sense");
        assert_eq!(
            result.recommendations[1].action,
            "Watch professional Valorant tournaments and analyze rotations"
        );
        assert!(result
            .recommendations
            .iter()
            .any(|recommendation| recommendation.priority == Priority::Medium));
    }

    #[test]
    fn breakdown_groups_raw_scores_by_dimension() {
        let answers = answers(vec![
            (8, rating(9)),  // tactical: 90
            (9, rating(6)),  // physical: 60
            (3, rating(10)), // mental: 100
        ]);
        let result = compute_result(None, &answers);

        assert_eq!(result.skill_breakdown.tactical, 30);
        assert_eq!(result.skill_breakdown.physical, 20);
        assert_eq!(result.skill_breakdown.mental, 33);
        assert_eq!(result.skill_breakdown.technical, 0);
    }

    #[test]
    fn computation_is_idempotent() {
        let answers = answers(vec![
            (1, choice("Silver/Gold (Intermediate)")),
            (8, rating(6)),
        ]);
        let first = compute_result(Some(Game::Valorant), &answers);
        let second = compute_result(Some(Game::Valorant), &answers);
        assert_eq!(first, second);
    }
}
