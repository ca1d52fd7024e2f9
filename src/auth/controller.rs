use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    devices::dtos::device_token_dto::DeviceTokenDto,
    AppState,
};

use super::{
    dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    models::access_info::AccessInfo,
    service,
};

pub async fn register(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<RegisterDto>,
) -> Result<(StatusCode, Json<AccessInfo>), ApiError> {
    match dto.validate() {
        Ok(_) => match service::register(&dto, &state).await {
            Ok(access_info) => Ok((StatusCode::CREATED, Json(access_info))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn login(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<LoginDto>,
) -> Result<Json<AccessInfo>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::login(&dto, &state).await {
            Ok(access_info) => Ok(Json(access_info)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn refresh(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<DeviceTokenDto>,
) -> Result<Json<AccessInfo>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::refresh(&dto, &state).await {
            Ok(access_info) => Ok(Json(access_info)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn logout(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<DeviceTokenDto>,
) -> Result<StatusCode, ApiError> {
    match dto.validate() {
        Ok(_) => match service::logout(&dto, &state).await {
            Ok(_) => Ok(StatusCode::NO_CONTENT),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
