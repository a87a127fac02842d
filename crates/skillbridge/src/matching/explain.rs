use std::future::Future;

use serde::Deserialize;
use serde_json::json;

use super::domain::{RequesterProfile, ScoredCandidate};

/// User-safe text substituted whenever the generative-text service fails.
pub const FALLBACK_EXPLANATION: &str =
    "AI service is currently unavailable. Please review the recommended matches manually.";

/// Gateway to the hosted generative-text service.
///
/// The matching service treats this as fire-and-forget request/reply: one
/// prompt in, one completion out. Implementations must be cheap to call
/// repeatedly since the service retries once on failure.
pub trait ExplanationClient: Send + Sync {
    fn explain(
        &self,
        requester: &RequesterProfile,
        top_matches: &[ScoredCandidate],
    ) -> impl Future<Output = Result<String, ExplanationError>> + Send;
}

/// Errors raised by the explanation gateway.
#[derive(Debug, thiserror::Error)]
pub enum ExplanationError {
    #[error("no API key configured for the generative-text service")]
    MissingApiKey,
    #[error("explanation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generative-text service error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("generative-text service returned an empty completion")]
    EmptyCompletion,
}

/// Build the talent-scout prompt embedding the requester profile and the
/// ranked coaches' names, specialties, experience, and locations.
pub fn build_prompt(requester: &RequesterProfile, top_matches: &[ScoredCandidate]) -> String {
    let coaches_text = top_matches
        .iter()
        .enumerate()
        .map(|(index, scored)| {
            let candidate = &scored.candidate;
            format!(
                "{}. {} - {} ({}) - {}",
                index + 1,
                candidate.name,
                candidate.specialty.as_deref().unwrap_or("Coach"),
                candidate.experience.as_deref().unwrap_or("N/A"),
                candidate.location.as_deref().unwrap_or("Location N/A"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert Talent Scout for SkillBridge.\n\
         Your primary role is to analyze student profiles and recommend the best-matched coaches.\n\
         \n\
         Student Profile:\n\
         - Category: {category}\n\
         - Game/Sport: {game}\n\
         - Role/Position: {role}\n\
         - Skill Level: {skill_level}\n\
         - Challenges: {target_gaps}\n\
         - Location: {location}\n\
         - Playstyle: {playstyle}\n\
         \n\
         Top {count} Matched Coaches:\n\
         {coaches_text}\n\
         \n\
         Task:\n\
         1. Recommend the #1 best coach from the list above for the student.\n\
         2. Explain why they are the best fit for the student in a few lines.\n\
         3. Explain why their specialization solves the student's specific challenges in few lines.\n\
         4. Suggest one alternative coach.\n\
         \n\
         Note: Format the response in a friendly, professional tone. Focus on reasoning and match quality.",
        category = requester
            .category
            .map(|category| category.label())
            .unwrap_or("Esports"),
        game = requester.game.as_deref().unwrap_or("N/A"),
        role = requester.role.as_deref().unwrap_or("N/A"),
        skill_level = requester.skill_level.as_deref().unwrap_or("N/A"),
        target_gaps = requester.target_gaps.as_deref().unwrap_or("N/A"),
        location = requester.location.as_deref().unwrap_or("Online"),
        playstyle = requester.playstyle.as_deref().unwrap_or("N/A"),
        count = top_matches.len(),
    )
}

/// HTTP client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

impl GeminiClient {
    pub fn new(config: &crate::config::GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, for tests against a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ExplanationClient for GeminiClient {
    async fn explain(
        &self,
        requester: &RequesterProfile,
        top_matches: &[ScoredCandidate],
    ) -> Result<String, ExplanationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ExplanationError::MissingApiKey)?;

        let prompt = build_prompt(requester, top_matches);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExplanationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: GenerateContentResponse = response.json().await?;
        completion
            .first_text()
            .ok_or(ExplanationError::EmptyCompletion)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<CompletionCandidate>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .find(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct CompletionCandidate {
    #[serde(default)]
    content: CompletionContent,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionContent {
    #[serde(default)]
    parts: Vec<CompletionPart>,
}

#[derive(Debug, Deserialize)]
struct CompletionPart {
    #[serde(default)]
    text: String,
}
