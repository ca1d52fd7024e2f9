pub mod budget_period;
pub mod budget_status;
