use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ExtractionApiError {
    FileRequired,
    UnsupportedFileType,
    NoTextFound,
    TextExtractionFailed,
    LlmRequestFailed,
    InvalidLlmOutput,
}

impl ExtractionApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FileRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "File is required.".to_string(),
            },
            Self::UnsupportedFileType => ApiError {
                code: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: "Unsupported file type.".to_string(),
            },
            Self::NoTextFound => ApiError {
                code: StatusCode::UNPROCESSABLE_ENTITY,
                message: "No text found in file.".to_string(),
            },
            Self::TextExtractionFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to read text from file.".to_string(),
            },
            Self::LlmRequestFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to reach the extraction model.".to_string(),
            },
            Self::InvalidLlmOutput => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "LLM did not return valid JSON.".to_string(),
            },
        }
    }
}
