use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum BudgetsApiError {
    BudgetNotFound,
    BudgetAlreadyExists,
}

impl BudgetsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::BudgetNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Budget not found.".to_string(),
            },
            Self::BudgetAlreadyExists => ApiError {
                code: StatusCode::CONFLICT,
                message: "A budget for this category and period already exists.".to_string(),
            },
        }
    }
}
