// AI Query Gateway: recommendations, career details, learning path.
// Each operation pairs a prompt template with a response schema and parses
// the returned text into typed structs.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod prompts;
pub mod schemas;

use tracing::info;

use crate::errors::AppError;
use crate::gateway::prompts::{
    DETAILS_PROMPT_TEMPLATE, LEARNING_PATH_PROMPT_TEMPLATE, RECOMMENDATIONS_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::llm_client::{generate_json, GenerativeClient};
use crate::models::{CareerDetails, CareerPath, SkillsLearningPath};

/// Fetches 3–5 recommended career paths for the given skills text.
///
/// Precondition: `skills` is non-empty after trimming — enforced by the
/// caller, not here. One call, no caching: identical inputs issue
/// independent requests. On any transport or parse failure the whole
/// operation fails; no partial result is returned.
pub async fn fetch_recommendations(
    llm: &dyn GenerativeClient,
    skills: &str,
) -> Result<Vec<CareerPath>, AppError> {
    let prompt = RECOMMENDATIONS_PROMPT_TEMPLATE.replace("{skills}", skills);

    let recommendations: Vec<CareerPath> =
        generate_json(llm, &prompt, ADVISOR_SYSTEM, &schemas::career_path_list())
            .await
            .map_err(|e| AppError::Llm(format!("Recommendation parsing failed: {e}")))?;

    info!("Fetched {} career recommendations", recommendations.len());
    Ok(recommendations)
}

/// Fetches the full career guide for one title.
///
/// Precondition: `title` came from a previous fetch_recommendations call —
/// not independently validated.
pub async fn fetch_career_details(
    llm: &dyn GenerativeClient,
    title: &str,
) -> Result<CareerDetails, AppError> {
    let prompt = DETAILS_PROMPT_TEMPLATE.replace("{title}", title);

    let details: CareerDetails =
        generate_json(llm, &prompt, ADVISOR_SYSTEM, &schemas::career_details())
            .await
            .map_err(|e| AppError::Llm(format!("Career details fetch failed: {e}")))?;

    info!("Fetched career guide for {title}");
    Ok(details)
}

/// Generates a personalized learning path grouped by skill area.
pub async fn fetch_skills_learning_path(
    llm: &dyn GenerativeClient,
    skills: &str,
) -> Result<Vec<SkillsLearningPath>, AppError> {
    let prompt = LEARNING_PATH_PROMPT_TEMPLATE.replace("{skills}", skills);

    let path: Vec<SkillsLearningPath> =
        generate_json(llm, &prompt, ADVISOR_SYSTEM, &schemas::skills_learning_path())
            .await
            .map_err(|e| AppError::Llm(format!("Learning path generation failed: {e}")))?;

    info!("Generated learning path with {} skill areas", path.len());
    Ok(path)
}
