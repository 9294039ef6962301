//! ATS optimization — reworks an existing cover letter around job-description keywords.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{system_prompt, OPTIMIZE_ATS_PERSONA, OPTIMIZE_ATS_PROMPT_TEMPLATE};
use crate::llm_client::{request_json, LlmError, ModelApi, ModelPrompt};
use crate::schema::OptimizeAtsRequest;

/// The optimized letter plus the keywords the model identified in the
/// job description, in the order it reported them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsOptimizationResult {
    pub optimized_cover_letter: String,
    pub keywords: Vec<String>,
}

pub async fn run(
    request: &OptimizeAtsRequest,
    model: &dyn ModelApi,
) -> Result<AtsOptimizationResult, LlmError> {
    let prompt = OPTIMIZE_ATS_PROMPT_TEMPLATE
        .replace("{job_description}", &request.job_description)
        .replace("{cover_letter}", &request.cover_letter);

    request_json(
        model,
        ModelPrompt::text(&system_prompt(OPTIMIZE_ATS_PERSONA), prompt),
    )
    .await
}
