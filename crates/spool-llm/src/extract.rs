//! Extraction of structured JSON from free-form model output.

use serde_json::Value;

use crate::error::LlmError;

const FENCE: &str = "```";

/// Recovers a JSON value from raw model output.
///
/// Models often wrap their JSON in a markdown code fence, with or without a
/// `json` language tag. The fence is stripped only when both the leading
/// and trailing markers are present; partial fences are left alone and
/// surface as a parse failure carrying the offending text.
pub fn extract_json(raw: &str) -> Result<Value, LlmError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    let text = strip_code_fence(trimmed);
    let text = text.trim();

    serde_json::from_str(text).map_err(|_| LlmError::InvalidResponseFormat {
        raw: text.to_string(),
    })
}

/// Removes a wrapping triple-backtick fence.
///
/// Drops the first and last lines when the text starts and ends with a
/// fence marker; a remaining first line that is a bare (case-insensitive)
/// `json` tag is dropped too.
fn strip_code_fence(text: &str) -> String {
    if !(text.starts_with(FENCE) && text.ends_with(FENCE)) || text.len() < 2 * FENCE.len() {
        return text.to_string();
    }

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= 2 {
        return text.to_string();
    }

    let mut body = &lines[1..lines.len() - 1];
    if body
        .first()
        .is_some_and(|line| line.trim().eq_ignore_ascii_case("json"))
    {
        body = &body[1..];
    }

    body.join("\n")
}
