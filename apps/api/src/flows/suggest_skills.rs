//! Skill and achievement suggestion — tailors résumé content to a job description.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{
    system_prompt, SUGGEST_SKILLS_PERSONA, SUGGEST_SKILLS_PROMPT_TEMPLATE,
};
use crate::llm_client::{request_json, LlmError, ModelApi, ModelPrompt};
use crate::schema::SuggestSkillsRequest;

/// Suggested skills (1-3 words each) and first-person achievement rewrites.
/// Achievements are constrained to the supplied résumé text by prompt
/// instruction only; the flow does not verify containment programmatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSuggestion {
    pub suggested_skills: Vec<String>,
    pub suggested_achievements: Vec<String>,
}

pub async fn run(
    request: &SuggestSkillsRequest,
    model: &dyn ModelApi,
) -> Result<SkillSuggestion, LlmError> {
    let prompt = SUGGEST_SKILLS_PROMPT_TEMPLATE
        .replace("{job_description}", &request.job_description)
        .replace("{resume}", &request.resume);

    request_json(
        model,
        ModelPrompt::text(&system_prompt(SUGGEST_SKILLS_PERSONA), prompt),
    )
    .await
}
