use crate::infra::{load_seed, sample_coaches, sample_requests, InMemoryProfileStore, StaticExplanationClient};
use clap::Args;
use skillbridge::assessment::{compute_result, AssessmentAnswer, Game};
use skillbridge::error::AppError;
use skillbridge::matching::{CoachMatchingService, MatchingConfig, RequestId};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Coaching request to match (defaults to the bundled sample request)
    #[arg(long, default_value = "REQ_001")]
    pub(crate) request: String,
    /// JSON seed file with coaches and coaching requests
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Game the questionnaire was answered for (valorant, bgmi, cricket, football)
    #[arg(long)]
    pub(crate) game: Option<String>,
    /// JSON file mapping question numbers to answers (ratings or answer text)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Emit the full result as JSON instead of the readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { request, seed } = args;

    let store = Arc::new(InMemoryProfileStore::default());
    match seed {
        Some(path) => {
            let seed = load_seed(&path)?;
            store.insert_coaches(seed.coaches);
            for (id, profile) in seed.requests {
                store.insert_request(id, profile);
            }
        }
        None => {
            store.insert_coaches(sample_coaches());
            for (id, profile) in sample_requests() {
                store.insert_request(id, profile);
            }
        }
    }

    let explainer = Arc::new(StaticExplanationClient::new(
        "Offline demo reasoning: the top match lines up with the student's game, role, and city.",
    ));
    let service = Arc::new(CoachMatchingService::new(
        store,
        explainer,
        MatchingConfig::default(),
    ));

    println!("Coach matching demo");
    println!("Coaching request: {request}");

    let outcome = match service.match_coaches(&RequestId(request)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("Matching unavailable: {err}");
            return Ok(());
        }
    };

    println!(
        "\nRecommended coach: {}",
        outcome.recommended_coach.as_deref().unwrap_or("none")
    );
    println!("\nRanked matches");
    for (index, scored) in outcome.all_matches.iter().enumerate() {
        println!(
            "{}. {} — score {}",
            index + 1,
            scored.candidate.name,
            scored.match_score
        );
        for component in &scored.score_components {
            println!(
                "   - {:?}: +{} ({})",
                component.factor, component.points, component.notes
            );
        }
    }

    println!("\nReasoning ({:?} source)", outcome.explanation_source);
    println!("{}", outcome.ai_reasoning);

    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        game,
        answers,
        json,
    } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let answers: BTreeMap<u8, AssessmentAnswer> = serde_json::from_str(&raw)?;
    let game = game.as_deref().and_then(Game::from_key);

    let result = compute_result(game, &answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Skill assessment");
    match result.game {
        Some(game) => println!("Game: {}", game.key()),
        None => println!("Game: general"),
    }
    println!(
        "Overall score: {}/100 ({})",
        result.overall_score,
        result.skill_level.label()
    );

    println!("\nParameter scores");
    for parameter in &result.parameter_scores {
        println!(
            "- Q{} {}: {}/100",
            parameter.question, parameter.name, parameter.score
        );
    }

    if result.strengths.is_empty() {
        println!("\nStrengths: none identified yet");
    } else {
        println!("\nStrengths");
        for strength in &result.strengths {
            println!("- {strength}");
        }
    }

    if result.weaknesses.is_empty() {
        println!("\nWeaknesses: none flagged");
    } else {
        println!("\nWeaknesses");
        for weakness in &result.weaknesses {
            println!("- {weakness}");
        }
    }

    if !result.insights.is_empty() {
        println!("\nInsights");
        for insight in &result.insights {
            println!("- {insight}");
        }
    }

    if !result.recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &result.recommendations {
            println!(
                "- [{:?}] {}: {}",
                recommendation.priority, recommendation.area, recommendation.action
            );
        }
    }

    let breakdown = &result.skill_breakdown;
    println!(
        "\nSkill breakdown: technical {} | tactical {} | physical {} | mental {}",
        breakdown.technical, breakdown.tactical, breakdown.physical, breakdown.mental
    );

    Ok(())
}
