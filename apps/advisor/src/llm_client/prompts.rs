// Shared prompt constants. Each gateway operation defines its own prompt
// template in gateway/prompts.rs; this file contains the cross-cutting
// system instruction sent with every call.

/// System instruction shared by every gateway call.
///
/// The response schema already constrains the model to JSON, but the
/// instruction restates the rule so an unconstrained fallback still parses.
pub const ADVISOR_SYSTEM: &str = "You are an expert career advisor for students \
    and professionals. Ground every recommendation in the skills the user \
    actually lists — do not invent experience they did not mention. \
    You MUST respond with valid JSON only, conforming to the response schema \
    supplied with the request. \
    Do NOT include any text outside the JSON. \
    Do NOT use markdown code fences.";
