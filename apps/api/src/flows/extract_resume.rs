//! Résumé field extraction — accepts raw text or an uploaded file.

use serde::{Deserialize, Serialize};

use crate::data_uri::DataUri;
use crate::flows::prompts::{
    system_prompt, EXTRACT_RESUME_FILE_PROMPT, EXTRACT_RESUME_PERSONA,
    EXTRACT_RESUME_TEXT_TEMPLATE,
};
use crate::llm_client::{request_json, LlmError, ModelApi, ModelPrompt, UserBlock};

/// The two input shapes this flow accepts. The flow owns the difference in
/// how each is submitted to the model API; callers just pick whichever the
/// Presentation Layer produced.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    Text(String),
    File(DataUri),
}

/// First-person experience summary plus the candidate's skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResumeData {
    pub experience_summary: String,
    pub skills: Vec<String>,
}

pub async fn run(
    source: ResumeSource,
    model: &dyn ModelApi,
) -> Result<ExtractedResumeData, LlmError> {
    let system = system_prompt(EXTRACT_RESUME_PERSONA);

    let prompt = match source {
        ResumeSource::Text(text) => ModelPrompt::text(
            &system,
            EXTRACT_RESUME_TEXT_TEMPLATE.replace("{resume_text}", &text),
        ),
        // The file rides as a document block ahead of the instruction text
        ResumeSource::File(file) => ModelPrompt {
            system,
            blocks: vec![
                UserBlock::Document {
                    media_type: file.media_type,
                    data: file.data,
                },
                UserBlock::Text(EXTRACT_RESUME_FILE_PROMPT.to_string()),
            ],
        },
    };

    request_json(model, prompt).await
}
