use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::HardtimesError;
use crate::models::Plan;

/// Gemini generateContent endpoint, minus the model segment.
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for plan generation.
const PLAN_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client for the side hustle coach. One request per generated plan, no
/// caching, no automatic retry.
pub struct PlanClient {
    client: reqwest::Client,
    api_key: String,
}

impl PlanClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Read the API key from the environment.
    pub fn from_env() -> Result<Self, HardtimesError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(HardtimesError::missing_api_key)?;
        Ok(Self::new(api_key))
    }

    /// Request a side hustle plan for the given profile.
    ///
    /// Skills and time must be non-empty; constraints may be blank. Every
    /// downstream failure (transport, non-JSON payload, rejected payload)
    /// collapses into the single retry-eligible user message. The cause is
    /// logged, never surfaced.
    pub async fn generate_plan(
        &self,
        skills: &str,
        time: &str,
        constraints: &str,
    ) -> Result<Plan, HardtimesError> {
        if skills.trim().is_empty() || time.trim().is_empty() {
            return Err(HardtimesError::missing_inputs());
        }
        let prompt = build_prompt(skills, time, constraints);
        let text = self.call_api(&prompt).await.map_err(|e| {
            warn!("plan generation failed: {e:#}");
            HardtimesError::plan_generation_failed()
        })?;
        plan_from_json(&text).map_err(|e| {
            warn!("plan response rejected: {e:#}");
            HardtimesError::plan_generation_failed()
        })
    }

    async fn call_api(&self, prompt: &str) -> Result<String> {
        debug!("calling {PLAN_MODEL} with a {} char prompt", prompt.len());

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: plan_schema(),
                temperature: 0.8,
                top_p: 0.9,
            },
        };

        let url = format!("{GEMINI_API_URL}/{PLAN_MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("API error {status}: {body}"));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("malformed API response: {e}"))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| anyhow!("response carried no candidates"))
    }
}

/// Coaching prompt embedding the user profile.
fn build_prompt(skills: &str, time: &str, constraints: &str) -> String {
    format!(
        "You are an expert side hustle coach specializing in helping people during tough \
         economic times. Your advice is practical, realistic, and encouraging. Based on the \
         following user profile, generate one realistic side hustle idea and exactly 5 simple, \
         actionable starter tasks to begin.\n\n\
         User Profile:\n\
         - Skills: \"{skills}\"\n\
         - Time Available: \"{time}\"\n\
         - Constraints or Resources: \"{constraints}\"\n\n\
         Generate a creative but practical idea that the user can start with minimal investment. \
         The tasks should be clear, concise first steps."
    )
}

/// Response schema sent with the request. Asks for exactly five tasks;
/// receipt validation is looser (see `plan_from_json`).
fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "idea": {
                "type": "STRING",
                "description": "A single, realistic, and creative side hustle idea based on the user's profile. Should be a short, catchy title."
            },
            "tasks": {
                "type": "ARRAY",
                "description": "An array of exactly 5 simple, actionable starter tasks for the side hustle. Each task should be a concise string.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["idea", "tasks"]
    })
}

/// Parse and validate the model's JSON text into a fresh plan.
///
/// Rejects an absent or empty idea and an empty task list. A task count
/// other than the five the schema asks for is accepted as-is.
pub fn plan_from_json(text: &str) -> Result<Plan> {
    let response: PlanResponse = serde_json::from_str(text.trim())
        .map_err(|e| anyhow!("response is not valid plan JSON: {e}"))?;
    if response.idea.trim().is_empty() {
        return Err(anyhow!("response has no idea"));
    }
    if response.tasks.is_empty() {
        return Err(anyhow!("response has no tasks"));
    }
    Ok(Plan::new(response.idea, response.tasks))
}

/// Wire shape of the generated plan payload.
#[derive(Debug, Deserialize)]
struct PlanResponse {
    #[serde(default)]
    idea: String,
    #[serde(default)]
    tasks: Vec<String>,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
