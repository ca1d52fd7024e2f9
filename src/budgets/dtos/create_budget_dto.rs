use serde::Deserialize;
use validator::Validate;

use crate::budgets::enums::budget_period::BudgetPeriod;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBudgetDto {
    #[validate(custom(
        function = "crate::categories::dtos::validate_category_name",
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: String,
    #[serde(alias = "limit", alias = "amountLimit")]
    #[validate(custom(
        function = "super::validate_amount_limit",
        message = "amount_limit must be greater than 0."
    ))]
    pub amount_limit: f64,
    pub period: Option<BudgetPeriod>,
}
