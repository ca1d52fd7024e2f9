use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    BadLogin,
    MissingCredentials,
    InvalidToken,
    TokenExpired,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::BadLogin => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid username or password.".to_string(),
            },
            Self::MissingCredentials => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing credentials.".to_string(),
            },
            Self::InvalidToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token.".to_string(),
            },
            Self::TokenExpired => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Token expired.".to_string(),
            },
        }
    }
}
