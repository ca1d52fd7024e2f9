use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CategoriesApiError {
    CategoryNotFound,
    CategoryAlreadyExists,
}

impl CategoriesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::CategoryNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Category not found.".to_string(),
            },
            Self::CategoryAlreadyExists => ApiError {
                code: StatusCode::CONFLICT,
                message: "Category already exists.".to_string(),
            },
        }
    }
}
