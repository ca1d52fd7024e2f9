use serde::Serialize;
use sqlx::FromRow;

use crate::budgets::enums::budget_status::BudgetStatus;

use super::budget::Budget;

/// Selects budgets with the owner's expenditure in the budget's category
/// during its current window. Binds `$1` owner, then start/end pairs for the
/// weekly, monthly and yearly windows (`$2`..`$7`).
pub static SELECT_BUDGETS_WITH_SPENT_SQL: &str = "SELECT budgets.*, COALESCE((\
    SELECT SUM(transactions.amount) FROM transactions \
    WHERE transactions.user_id = budgets.user_id \
    AND transactions.transaction_type = 'expenditure' \
    AND transactions.category = budgets.category \
    AND transactions.created_at >= CASE budgets.period WHEN 'weekly' THEN $2 WHEN 'monthly' THEN $4 ELSE $6 END \
    AND transactions.created_at < CASE budgets.period WHEN 'weekly' THEN $3 WHEN 'monthly' THEN $5 ELSE $7 END\
    ), 0)::float8 AS spent FROM budgets WHERE budgets.user_id = $1";

pub static WINDOW_BIND_COUNT: u8 = 7;

#[derive(Debug, FromRow)]
pub struct BudgetSpentRow {
    #[sqlx(flatten)]
    pub budget: Budget,
    pub spent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetWithSpent {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub usage_percentage: f64,
    pub status: BudgetStatus,
}

impl BudgetWithSpent {
    pub fn new(budget: Budget, spent: f64) -> Self {
        let usage_percentage = match budget.amount_limit > 0.0 {
            true => spent / budget.amount_limit * 100.0,
            false => 0.0,
        };

        Self {
            remaining: budget.amount_limit - spent,
            usage_percentage,
            status: BudgetStatus::from_usage(spent, budget.amount_limit),
            spent,
            budget,
        }
    }
}

impl From<BudgetSpentRow> for BudgetWithSpent {
    fn from(row: BudgetSpentRow) -> Self {
        Self::new(row.budget, row.spent)
    }
}
