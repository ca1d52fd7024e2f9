use axum::headers::{authorization::Bearer, Authorization};
use jsonwebtoken::errors::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError,
    auth::{errors::AuthApiError, jwt::util::decode_jwt},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn from_header(authorization: Authorization<Bearer>, secret: &str) -> Result<Self, ApiError> {
        match decode_jwt(authorization.token(), secret) {
            Ok(claims) => Ok(claims),
            Err(e) => match e {
                ErrorKind::ExpiredSignature => Err(AuthApiError::TokenExpired.value()),
                _ => Err(AuthApiError::InvalidToken.value()),
            },
        }
    }
}
