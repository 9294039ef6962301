// All LLM prompt constants for the prompt flows.
// Reuses the cross-cutting JSON-only fragment from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// Builds a flow system prompt: the flow's persona plus the JSON-only guard.
pub fn system_prompt(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

pub const GENERATE_PERSONA: &str =
    "You are an expert career coach and professional writer who crafts tailored, \
    compelling cover letters.";

/// Cover letter generation prompt template.
/// Replace: {name}, {email}, {phone}, {address}, {company}, {contact_name},
///          {company_address}, {job_title}, {job_description},
///          {experience_summary}, {relevant_skills}, {template_style}, {tone}
pub const GENERATE_PROMPT_TEMPLATE: &str = r#"Write the body of a cover letter for the candidate below.

CANDIDATE:
Name: {name}
Email: {email}
Phone: {phone}
Address: {address}

RECIPIENT:
Company: {company}
Hiring manager: {contact_name}
Company address: {company_address}

ROLE:
Job title: {job_title}
Job description:
{job_description}

CANDIDATE EXPERIENCE SUMMARY:
{experience_summary}

RELEVANT SKILLS: {relevant_skills}

TEMPLATE STYLE: {template_style}
TONE: {tone}

Rules:
- Write in the first person, addressed to the hiring manager.
- Connect the candidate's experience and skills to the role's stated needs.
- Do NOT invent employers, dates, or accomplishments absent from the experience summary.
- Do NOT include the date, addresses, salutation, or signature block — the caller renders those around the body.
- Three to five paragraphs, matching the requested tone and template style.

Return a JSON object with this EXACT schema (no extra fields):
{
  "coverLetter": "the full cover letter body text"
}"#;

pub const SUGGEST_SKILLS_PERSONA: &str =
    "You are an AI assistant that helps users tailor their cover letters \
    to specific job descriptions.";

/// Skill suggestion prompt template. Replace: {job_description}, {resume}
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = r#"Given the following job description:
{job_description}

And the following resume:
{resume}

Suggest skills and achievements from the resume that are most relevant to the job description.
Skills must be concise (1-3 words).
Achievements must be re-worded in the first person and highlight how the skill was applied to the role.
Do NOT include accomplishments that are not in the resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "suggestedSkills": ["skill"],
  "suggestedAchievements": ["achievement"]
}"#;

pub const OPTIMIZE_ATS_PERSONA: &str =
    "You are an expert at optimizing cover letters for Applicant Tracking Systems (ATS).";

/// ATS optimization prompt template. Replace: {job_description}, {cover_letter}
pub const OPTIMIZE_ATS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and identify the most important keywords. Incorporate these keywords naturally into the cover letter to increase its chances of being noticed by an Applicant Tracking System.

Job Description:
{job_description}

Cover Letter:
{cover_letter}

Rules:
- The optimized cover letter must remain grammatically correct and keep a professional tone.
- Incorporate keywords naturally — do NOT keyword-stuff.
- List every keyword you identified from the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "optimizedCoverLetter": "the optimized cover letter text",
  "keywords": ["keyword"]
}"#;

pub const EXTRACT_JOB_PERSONA: &str = "You are an expert at parsing job descriptions.";

/// Job data extraction prompt template. Replace: {job_posting}
pub const EXTRACT_JOB_PROMPT_TEMPLATE: &str = r#"Extract the company name, job title, and company address from the following job posting text.

If an exact address is not available, use the general location (e.g., "San Francisco, CA").

Job Posting:
{job_posting}

Return a JSON object with this EXACT schema (no extra fields):
{
  "company": "the company name",
  "jobTitle": "the job title",
  "address": "the company address or general location"
}"#;

pub const EXTRACT_RESUME_PERSONA: &str = "You are an expert at parsing resumes.";

/// Résumé extraction prompt template for raw text input. Replace: {resume_text}
pub const EXTRACT_RESUME_TEXT_TEMPLATE: &str = r#"Extract the work experience from the following resume text and provide a comprehensive summary. The summary must be written in the first person and be suitable for a cover letter's experience summary section. Also list the candidate's skills in the order they appear.

Resume Text:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "experienceSummary": "the first-person experience summary",
  "skills": ["skill"]
}"#;

/// Résumé extraction prompt for file input; the résumé rides alongside as a
/// document block, so there is nothing to substitute.
pub const EXTRACT_RESUME_FILE_PROMPT: &str = r#"Extract the work experience from the attached resume document and provide a comprehensive summary. The summary must be written in the first person and be suitable for a cover letter's experience summary section. Also list the candidate's skills in the order they appear.

Return a JSON object with this EXACT schema (no extra fields):
{
  "experienceSummary": "the first-person experience summary",
  "skills": ["skill"]
}"#;
