use axum::{
    extract::{Path, Query, State},
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

use super::{
    dtos::{
        create_category_dto::CreateCategoryDto, edit_category_dto::EditCategoryDto,
        get_categories_filter_dto::GetCategoriesFilterDto,
    },
    models::category::Category,
    service,
};

pub async fn create_category(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreateCategoryDto>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::create_category(&dto, &claims, &state.pool).await {
            Ok(category) => Ok((StatusCode::CREATED, Json(category))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_categories(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetCategoriesFilterDto>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_categories(&dto, &claims, &state.pool).await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => Err(e),
    }
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Category>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_category_by_id(&id, &claims, &state.pool).await {
        Ok(category) => Ok(Json(category)),
        Err(e) => Err(e),
    }
}

pub async fn edit_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditCategoryDto>,
) -> Result<Json<Category>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::edit_category_by_id(&id, &dto, &claims, &state.pool).await {
            Ok(category) => Ok(Json(category)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn delete_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<StatusCode, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::delete_category_by_id(&id, &claims, &state.pool).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e),
    }
}
