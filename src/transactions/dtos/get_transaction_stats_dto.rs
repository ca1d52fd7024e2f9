use axum::http::StatusCode;
use serde::Deserialize;

use crate::{app::models::api_error::ApiError, transactions::enums::stats_period::StatsPeriod};

#[derive(Debug, Deserialize)]
pub struct GetTransactionStatsDto {
    pub period: Option<String>,
}

impl GetTransactionStatsDto {
    pub fn period(&self) -> Result<StatsPeriod, ApiError> {
        match &self.period {
            Some(period) => period.parse().map_err(|_| ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid period.".to_string(),
            }),
            None => Ok(StatsPeriod::default()),
        }
    }
}
