use axum::{
    extract::State,
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::jwt::models::claims::Claims,
    AppState,
};

use super::{dtos::edit_user_dto::EditUserDto, models::user::User, service};

pub async fn get_user_from_request(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<User>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_user_by_id(&claims.id, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}

pub async fn edit_user_from_request(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditUserDto>,
) -> Result<Json<User>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::edit_user_by_id(&dto, &claims, &state.pool).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => Err(e),
    }
}
