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
        create_budget_dto::CreateBudgetDto, edit_budget_dto::EditBudgetDto,
        get_budgets_filter_dto::GetBudgetsFilterDto,
    },
    models::{budget_with_spent::BudgetWithSpent, budgets_summary::BudgetsSummary},
    service,
};

pub async fn create_budget(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreateBudgetDto>,
) -> Result<(StatusCode, Json<BudgetWithSpent>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::create_budget(&dto, &claims, &state.pool).await {
            Ok(budget) => Ok((StatusCode::CREATED, Json(budget))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_budgets(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetBudgetsFilterDto>,
) -> Result<Json<Vec<BudgetWithSpent>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_budgets(&dto, &claims, &state.pool).await {
        Ok(budgets) => Ok(Json(budgets)),
        Err(e) => Err(e),
    }
}

pub async fn get_budgets_summary(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<BudgetsSummary>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_budgets_summary(&claims, &state.pool).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e),
    }
}

pub async fn get_budget_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<BudgetWithSpent>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_budget_by_id(&id, &claims, &state.pool).await {
        Ok(budget) => Ok(Json(budget)),
        Err(e) => Err(e),
    }
}

pub async fn edit_budget_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditBudgetDto>,
) -> Result<Json<BudgetWithSpent>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::edit_budget_by_id(&id, &dto, &claims, &state.pool).await {
            Ok(budget) => Ok(Json(budget)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn delete_budget_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<StatusCode, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::delete_budget_by_id(&id, &claims, &state.pool).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e),
    }
}
