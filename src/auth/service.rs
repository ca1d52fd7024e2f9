use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::hasher},
    categories,
    devices::{self, dtos::device_token_dto::DeviceTokenDto},
    users, AppState,
};

use super::{
    dtos::{login_dto::LoginDto, register_dto::RegisterDto},
    errors::AuthApiError,
    jwt::util::sign_jwt,
    models::access_info::AccessInfo,
};

pub async fn register(dto: &RegisterDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    let user = users::service::create_user_as_admin(dto, &state.pool).await?;

    if let Err(e) = categories::service::seed_default_categories(&user.id, &state.pool).await {
        tracing::error!("failed to seed categories for user {}: {}", user.id, e.message);
    }

    let login_dto = LoginDto {
        username: None,
        email: Some(dto.email.to_string()),
        password: dto.password.to_string(),
    };

    login(&login_dto, state).await
}

pub async fn login(dto: &LoginDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    let user = users::service::get_user_by_login_dto_as_admin(dto, &state.pool).await?;

    let Ok(matches) = hasher::verify(dto.password.to_string(), user.password_hash.to_string()).await else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    if !matches {
        return Err(AuthApiError::BadLogin.value());
    }

    let device = devices::service::create_device_as_admin(&user, &state.pool).await?;

    Ok(AccessInfo {
        access_token: sign_jwt(&user.id, &state.envy.jwt_secret)?,
        refresh_token: Some(device.refresh_token),
        device_id: Some(device.id),
    })
}

pub async fn refresh(dto: &DeviceTokenDto, state: &AppState) -> Result<AccessInfo, ApiError> {
    devices::service::refresh_device_as_admin(dto, &state.pool).await?;

    Ok(AccessInfo {
        access_token: sign_jwt(&dto.user_id, &state.envy.jwt_secret)?,
        refresh_token: None,
        device_id: None,
    })
}

pub async fn logout(dto: &DeviceTokenDto, state: &AppState) -> Result<(), ApiError> {
    devices::service::logout_device_as_admin(dto, &state.pool).await
}
