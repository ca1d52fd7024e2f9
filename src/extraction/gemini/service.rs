// https://ai.google.dev/api/generate-content

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use tokio_retry::{strategy::ExponentialBackoff, RetryIf};

use crate::{
    app::{envy::Envy, models::api_error::ApiError},
    extraction::errors::ExtractionApiError,
};

use super::{
    config::{BACKOFF_BASE_MILLIS, BACKOFF_FACTOR, MAX_ATTEMPTS, MAX_BACKOFF_SECS},
    structs::gemini_generate_content_response::GeminiGenerateContentResponse,
};

#[derive(Debug)]
enum GenerateContentError {
    Transport(reqwest::Error),
    Status(StatusCode, String),
    Body(String),
}

impl GenerateContentError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(status, _) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Body(_) => false,
        }
    }
}

pub fn generate_content_url(envy: &Envy) -> String {
    let model = envy
        .gemini_model
        .strip_prefix("models/")
        .unwrap_or(&envy.gemini_model);

    [
        envy.gemini_base_url.trim_end_matches('/'),
        "/models/",
        model,
        ":generateContent",
    ]
    .concat()
}

pub async fn generate_content_with_retry(
    prompt: &str,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<String, ApiError> {
    let retry_strategy = ExponentialBackoff::from_millis(BACKOFF_BASE_MILLIS)
        .factor(BACKOFF_FACTOR)
        .max_delay(Duration::from_secs(MAX_BACKOFF_SECS))
        .take(MAX_ATTEMPTS - 1);

    let result = RetryIf::spawn(
        retry_strategy,
        || async {
            let result = generate_content(prompt, client, envy).await;
            if let Err(e) = &result {
                tracing::warn!("gemini generateContent failed: {:?}", e);
            }
            result
        },
        GenerateContentError::is_retryable,
    )
    .await;

    match result {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::error!("gemini generateContent gave up: {:?}", e);
            Err(ExtractionApiError::LlmRequestFailed.value())
        }
    }
}

async fn generate_content(
    prompt: &str,
    client: &reqwest::Client,
    envy: &Envy,
) -> Result<String, GenerateContentError> {
    let res = client
        .post(generate_content_url(envy))
        .query(&[("key", &envy.gemini_api_key)])
        .json(&json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        }))
        .send()
        .await
        .map_err(GenerateContentError::Transport)?;

    let status = res.status();
    let text = res.text().await.map_err(GenerateContentError::Transport)?;

    if !status.is_success() {
        return Err(GenerateContentError::Status(status, text));
    }

    let response: GeminiGenerateContentResponse =
        serde_json::from_str(&text).map_err(|e| GenerateContentError::Body(e.to_string()))?;

    response
        .text()
        .ok_or_else(|| GenerateContentError::Body("response has no text".to_string()))
}
