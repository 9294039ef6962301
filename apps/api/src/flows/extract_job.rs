//! Job posting extraction — pulls company, title, and location out of raw text.

use serde::{Deserialize, Serialize};

use crate::flows::prompts::{system_prompt, EXTRACT_JOB_PERSONA, EXTRACT_JOB_PROMPT_TEMPLATE};
use crate::llm_client::{request_json, LlmError, ModelApi, ModelPrompt};
use crate::schema::ExtractJobRequest;

/// Structured fields extracted from a job posting. `address` may be a
/// general location ("San Francisco, CA") when no exact address appears.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedJobData {
    pub company: String,
    pub job_title: String,
    pub address: String,
}

pub async fn run(
    request: &ExtractJobRequest,
    model: &dyn ModelApi,
) -> Result<ExtractedJobData, LlmError> {
    let prompt = EXTRACT_JOB_PROMPT_TEMPLATE.replace("{job_posting}", &request.job_posting);

    request_json(
        model,
        ModelPrompt::text(&system_prompt(EXTRACT_JOB_PERSONA), prompt),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::llm_client::UserBlock;

    const POSTING_FIXTURE: &str = "Acme Robotics is hiring a Controls Engineer. \
        Our team is based in Boulder, Colorado and ships autonomous arms worldwide.";

    #[tokio::test]
    async fn test_extracts_structured_fields() {
        let stub = StubModel::replying(
            r#"{"company": "Acme Robotics", "jobTitle": "Controls Engineer", "address": "Boulder, CO"}"#,
        );

        let request = ExtractJobRequest {
            job_posting: POSTING_FIXTURE.to_string(),
        };
        let data = run(&request, stub.as_ref()).await.unwrap();
        assert_eq!(data.company, "Acme Robotics");
        assert_eq!(data.job_title, "Controls Engineer");
        // General location fallback is a valid address value
        assert_eq!(data.address, "Boulder, CO");
    }

    #[tokio::test]
    async fn test_prompt_carries_the_posting() {
        let stub = StubModel::replying(
            r#"{"company": "c", "jobTitle": "t", "address": "a"}"#,
        );
        let request = ExtractJobRequest {
            job_posting: POSTING_FIXTURE.to_string(),
        };
        run(&request, stub.as_ref()).await.unwrap();

        let prompt = stub.last_prompt().unwrap();
        let UserBlock::Text(text) = &prompt.blocks[0] else {
            panic!("expected a text block");
        };
        assert!(text.contains(POSTING_FIXTURE));
        assert!(!text.contains("{job_posting}"));
    }
}
