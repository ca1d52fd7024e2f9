pub mod budget;
pub mod budget_with_spent;
pub mod budgets_summary;
