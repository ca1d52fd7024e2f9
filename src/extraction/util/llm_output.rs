use regex::Regex;
use serde_json::Value;

use crate::{app::models::api_error::ApiError, extraction::errors::ExtractionApiError};

lazy_static! {
    static ref CODE_FENCE_REGEX: Regex = Regex::new(r"```(?:json)?\s*([\s\S]*?)```").unwrap();
}

/// Parses the reply as JSON, falling back to the first fenced code block.
pub fn parse_llm_output(content: &str) -> Result<Value, ApiError> {
    if let Ok(value) = serde_json::from_str::<Value>(content.trim()) {
        return Ok(value);
    }

    let Some(captures) = CODE_FENCE_REGEX.captures(content) else {
        tracing::error!("llm reply is not json ({})", reply_summary(content));
        return Err(ExtractionApiError::InvalidLlmOutput.value());
    };

    let fenced = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    match serde_json::from_str::<Value>(fenced.trim()) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!("fenced llm reply is not json: {}", e);
            Err(ExtractionApiError::InvalidLlmOutput.value())
        }
    }
}

/// Replies carry statement data, so only their size is logged.
fn reply_summary(content: &str) -> String {
    [&content.chars().count().to_string(), " chars"].concat()
}
