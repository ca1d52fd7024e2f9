use axum::{
    extract::{Multipart, Path, Query, State},
    headers::{authorization::Bearer, Authorization},
    http::StatusCode,
    Json, TypedHeader,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::jwt::models::claims::Claims,
    extraction::{self, models::extraction_response::ExtractionResponse},
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
        get_transaction_stats_dto::GetTransactionStatsDto,
        get_transactions_filter_dto::GetTransactionsFilterDto,
    },
    models::{
        transaction::Transaction, transaction_stat::TransactionStat,
        transactions_page::TransactionsPage,
    },
    service,
};

pub async fn create_transaction(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::create_transaction(&dto, &claims, &state.pool).await {
            Ok(transaction) => Ok((StatusCode::CREATED, Json(transaction))),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn create_bulk_transactions(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dtos): JsonFromRequest<Vec<CreateTransactionDto>>,
) -> Result<(StatusCode, Json<Vec<Transaction>>), ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    for (i, dto) in dtos.iter().enumerate() {
        if let Err(e) = dto.validate() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: ["[", &i.to_string(), "] ", &e.to_string()].concat(),
            });
        }
    }

    match service::create_bulk_transactions(&dtos, &claims, &state.pool).await {
        Ok(transactions) => Ok((StatusCode::CREATED, Json(transactions))),
        Err(e) => Err(e),
    }
}

pub async fn get_transactions(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetTransactionsFilterDto>,
) -> Result<Json<TransactionsPage>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::get_transactions(&dto, &claims, &state.pool).await {
            Ok(page) => Ok(Json(page)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_transaction_stats(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    Query(dto): Query<GetTransactionStatsDto>,
) -> Result<Json<Vec<TransactionStat>>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;
    let period = dto.period()?;

    match service::get_transaction_stats(period, &claims, &state.pool).await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => Err(e),
    }
}

pub async fn extract_transactions(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    multipart: Multipart,
) -> Result<Json<ExtractionResponse>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match extraction::service::extract_from_multipart(multipart, &claims, &state).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Transaction>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::get_transaction_by_id(&id, &claims, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
    JsonFromRequest(dto): JsonFromRequest<EditTransactionDto>,
) -> Result<Json<Transaction>, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match dto.validate() {
        Ok(_) => match service::edit_transaction_by_id(&id, &dto, &claims, &state.pool).await {
            Ok(transaction) => Ok(Json(transaction)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<StatusCode, ApiError> {
    let claims = Claims::from_header(authorization, &state.envy.jwt_secret)?;

    match service::delete_transaction_by_id(&id, &claims, &state.pool).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e),
    }
}
