use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, auth::jwt::models::claims::Claims,
    budgets::dtos::create_budget_dto::CreateBudgetDto,
};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub amount_limit: f64,
    pub period: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Budget {
    pub fn new(dto: &CreateBudgetDto, claims: &Claims) -> Self {
        let current_time = time::current_time_in_secs();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: claims.id.to_string(),
            category: dto.category.trim().to_string(),
            amount_limit: dto.amount_limit,
            period: dto.period.unwrap_or_default().value().to_string(),
            updated_at: current_time,
            created_at: current_time,
        }
    }
}
