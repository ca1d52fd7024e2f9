use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::time},
    budgets::enums::budget_period::BudgetPeriod,
};

#[derive(Debug, Deserialize, Validate)]
pub struct EditBudgetDto {
    #[validate(custom(
        function = "crate::categories::dtos::validate_category_name",
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: Option<String>,
    #[serde(alias = "limit", alias = "amountLimit")]
    #[validate(custom(
        function = "super::validate_amount_limit",
        message = "amount_limit must be greater than 0."
    ))]
    pub amount_limit: Option<f64>,
    pub period: Option<BudgetPeriod>,
}

impl EditBudgetDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE budgets SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.category.is_some() {
            clauses.push(["category = $", &index.to_string()].concat());
            index += 1;
        }
        if self.amount_limit.is_some() {
            clauses.push(["amount_limit = $", &index.to_string()].concat());
            index += 1;
        }
        if self.period.is_some() {
            clauses.push(["period = $", &index.to_string()].concat());
            index += 1;
        }

        if clauses.is_empty() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Received nothing to edit.".to_string(),
            });
        }

        sql.push_str(&clauses.join(", "));
        sql.push_str(&[", updated_at = ", &time::current_time_in_secs().to_string()].concat());
        sql.push_str(&[" WHERE id = $", &index.to_string()].concat());
        sql.push_str(&[" AND user_id = $", &(index + 1).to_string()].concat());
        sql.push_str(" RETURNING *");

        tracing::debug!(sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_partial_update() {
        let dto = EditBudgetDto {
            category: Some("Rent".to_string()),
            amount_limit: None,
            period: Some(BudgetPeriod::Yearly),
        };

        let sql = dto.to_sql().unwrap();

        assert!(sql.starts_with("UPDATE budgets SET category = $1, period = $2, updated_at = "));
        assert!(sql.ends_with(" WHERE id = $3 AND user_id = $4 RETURNING *"));
    }

    #[test]
    fn nothing_to_edit() {
        let dto = EditBudgetDto {
            category: None,
            amount_limit: None,
            period: None,
        };

        assert_eq!(dto.to_sql().unwrap_err().code, StatusCode::BAD_REQUEST);
    }
}
