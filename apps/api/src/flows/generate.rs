//! Cover letter generation — the primary flow.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{system_prompt, GENERATE_PERSONA, GENERATE_PROMPT_TEMPLATE};
use crate::llm_client::{request_json, LlmError, ModelApi, ModelPrompt};
use crate::schema::CoverLetterRequest;

/// Output of the generation flow: the letter body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResult {
    pub cover_letter: String,
}

/// Generates a cover letter body from the validated request.
///
/// The model may phrase the letter differently across calls for identical
/// input; only the output shape is guaranteed.
pub async fn run(
    request: &CoverLetterRequest,
    model: &dyn ModelApi,
) -> Result<CoverLetterResult, LlmError> {
    let prompt = build_prompt(request);
    let result: CoverLetterResult = request_json(
        model,
        ModelPrompt::text(&system_prompt(GENERATE_PERSONA), prompt),
    )
    .await?;

    // An empty letter is a failed generation, never a silent success
    if result.cover_letter.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }

    Ok(result)
}

/// Renders the generation template from the validated record. Placeholders
/// and request fields are paired one-to-one.
fn build_prompt(request: &CoverLetterRequest) -> String {
    GENERATE_PROMPT_TEMPLATE
        .replace("{name}", &request.personal_information.name)
        .replace("{email}", &request.personal_information.email)
        .replace("{phone}", &request.personal_information.phone)
        .replace("{address}", &request.personal_information.address)
        .replace("{company}", &request.recipient_information.company)
        .replace("{contact_name}", &request.recipient_information.contact_name)
        .replace("{company_address}", &request.recipient_information.address)
        .replace("{job_title}", &request.job_details.job_title)
        .replace("{job_description}", &request.job_details.job_description)
        .replace(
            "{experience_summary}",
            &request.job_details.experience_summary,
        )
        .replace("{relevant_skills}", &request.job_details.relevant_skills)
        .replace("{template_style}", &request.template_style)
        .replace("{tone}", &request.tone)
}
