#![allow(dead_code)]

// Cross-cutting prompt fragments shared by every flow.
// Each coaching flow defines its own prompts in coaching::prompts;
// this file holds only the pieces that apply to all of them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
