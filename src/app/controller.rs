use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => Ok(Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
