//! Request schemas shared by the action layer and the flows.
//!
//! Constraints mirror the form contract: required strings, minimum lengths,
//! email format, and default substitution for the optional style fields.
//! `describe_errors` flattens every violated constraint into one message so
//! callers see the full list, not just the first failure.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required."))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required."))]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInformation {
    #[validate(length(min = 1, message = "Company name is required."))]
    pub company: String,
    #[validate(length(min = 1, message = "Hiring manager's name is required."))]
    pub contact_name: String,
    #[validate(length(min = 1, message = "Company address is required."))]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[validate(length(min = 1, message = "Job title is required."))]
    pub job_title: String,
    #[validate(length(min = 20, message = "Job description should be more detailed."))]
    pub job_description: String,
    #[validate(length(
        min = 20,
        message = "Please provide a summary of your experience or upload a resume."
    ))]
    pub experience_summary: String,
    #[validate(length(min = 3, message = "Please list some relevant skills."))]
    pub relevant_skills: String,
}

/// The full generation form. `template_style` and `tone` are substituted
/// with their defaults when absent from the request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest {
    #[validate(nested)]
    pub personal_information: PersonalInformation,
    #[validate(nested)]
    pub recipient_information: RecipientInformation,
    #[validate(nested)]
    pub job_details: JobDetails,
    #[serde(default = "default_template_style")]
    pub template_style: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_template_style() -> String {
    "classic".to_string()
}

fn default_tone() -> String {
    "professional".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsRequest {
    #[validate(length(min = 1, message = "Job description is required."))]
    pub job_description: String,
    #[validate(length(min = 1, message = "Resume text is required."))]
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeAtsRequest {
    #[validate(length(min = 1, message = "Cover letter text is required."))]
    pub cover_letter: String,
    #[validate(length(min = 1, message = "Job description is required."))]
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExtractJobRequest {
    #[validate(length(min = 1, message = "Job posting text is required."))]
    pub job_posting: String,
}

/// Résumé extraction input. Either shape is accepted; the struct-level rule
/// only demands that at least one is present. Text wins when both are sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = has_resume_source))]
pub struct ExtractResumeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_data_uri: Option<String>,
}

fn has_resume_source(request: &ExtractResumeRequest) -> Result<(), ValidationError> {
    let has_text = request
        .resume_text
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let has_uri = request
        .resume_data_uri
        .as_deref()
        .is_some_and(|u| !u.is_empty());

    if has_text || has_uri {
        Ok(())
    } else {
        let mut error = ValidationError::new("resume_source");
        error.message = Some("Provide resume text or an uploaded resume file.".into());
        Err(error)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Error flattening
// ────────────────────────────────────────────────────────────────────────────

/// Flattens nested validation errors into sorted `path.field: message` lines,
/// joined by a space. Every violated constraint is reported.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut lines = Vec::new();
    collect_errors("", errors, &mut lines);
    lines.sort();
    lines.join(" ")
}

fn collect_errors(prefix: &str, errors: &ValidationErrors, lines: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = if prefix.is_empty() {
            field.clone()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("failed `{}` constraint", error.code));
                    // Struct-level rules land under "__all__" — no useful path
                    if field == "__all__" {
                        lines.push(message);
                    } else {
                        lines.push(format!("{path}: {message}"));
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_errors(&path, nested, lines),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_errors(&format!("{path}[{index}]"), nested, lines);
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
