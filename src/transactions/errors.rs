use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
    EmptyBulk,
    BulkTooLarge,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found.".to_string(),
            },
            Self::EmptyBulk => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Expected at least one transaction.".to_string(),
            },
            Self::BulkTooLarge => ApiError {
                code: StatusCode::PAYLOAD_TOO_LARGE,
                message: "Too many transactions in one request.".to_string(),
            },
        }
    }
}
