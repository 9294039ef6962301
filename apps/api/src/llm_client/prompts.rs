// Shared prompt fragments. Each flow defines its own prompts alongside it
// (see flows::prompts); this file holds what is cross-cutting.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
