use serde::Serialize;

use crate::budgets::enums::budget_status::BudgetStatus;

use super::budget_with_spent::BudgetWithSpent;

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct BudgetsSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub usage_percentage: f64,
    pub over_budget_count: i64,
    pub near_limit_count: i64,
}

impl BudgetsSummary {
    pub fn from_budgets(budgets: &[BudgetWithSpent]) -> Self {
        let mut summary = Self::default();

        for budget in budgets {
            summary.total_budget += budget.budget.amount_limit;
            summary.total_spent += budget.spent;

            match budget.status {
                BudgetStatus::OverBudget => summary.over_budget_count += 1,
                BudgetStatus::NearLimit => summary.near_limit_count += 1,
                BudgetStatus::OnTrack => {}
            }
        }

        summary.remaining = summary.total_budget - summary.total_spent;
        if summary.total_budget > 0.0 {
            summary.usage_percentage = summary.total_spent / summary.total_budget * 100.0;
        }

        summary
    }
}
