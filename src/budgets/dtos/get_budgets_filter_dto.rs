use serde::Deserialize;

use crate::budgets::{
    enums::budget_period::BudgetPeriod,
    models::budget_with_spent::{SELECT_BUDGETS_WITH_SPENT_SQL, WINDOW_BIND_COUNT},
};

#[derive(Debug, Default, Deserialize)]
pub struct GetBudgetsFilterDto {
    pub category: Option<String>,
    pub period: Option<BudgetPeriod>,
}

impl GetBudgetsFilterDto {
    pub fn to_sql(&self) -> String {
        let mut sql = SELECT_BUDGETS_WITH_SPENT_SQL.to_string();

        let mut index: u8 = WINDOW_BIND_COUNT;

        if self.category.is_some() {
            index += 1;
            sql.push_str(&[" AND budgets.category = $", &index.to_string()].concat());
        }
        if self.period.is_some() {
            index += 1;
            sql.push_str(&[" AND budgets.period = $", &index.to_string()].concat());
        }

        sql.push_str(" ORDER BY budgets.created_at DESC, budgets.id DESC");

        tracing::debug!(sql);

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_follow_window_binds() {
        let dto = GetBudgetsFilterDto {
            category: Some("Food".to_string()),
            period: Some(BudgetPeriod::Monthly),
        };

        let sql = dto.to_sql();

        assert!(sql.starts_with("SELECT budgets.*, COALESCE((SELECT SUM(transactions.amount)"));
        assert!(sql.ends_with(
            "WHERE budgets.user_id = $1 AND budgets.category = $8 AND budgets.period = $9 ORDER BY budgets.created_at DESC, budgets.id DESC"
        ));
    }

    #[test]
    fn unfiltered() {
        assert!(GetBudgetsFilterDto::default()
            .to_sql()
            .ends_with("WHERE budgets.user_id = $1 ORDER BY budgets.created_at DESC, budgets.id DESC"));
    }
}
