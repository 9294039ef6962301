// Prompt flows: validated input → rendered template → model call → typed output.
// All LLM calls go through llm_client — no direct API calls here.

pub mod extract_job;
pub mod extract_resume;
pub mod generate;
pub mod optimize_ats;
pub mod prompts;
pub mod suggest_skills;
