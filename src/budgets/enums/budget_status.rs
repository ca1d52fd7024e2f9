use serde::Serialize;

pub static NEAR_LIMIT_PERCENTAGE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    pub fn from_usage(spent: f64, amount_limit: f64) -> Self {
        if spent > amount_limit {
            return Self::OverBudget;
        }

        let usage_percentage = match amount_limit > 0.0 {
            true => spent / amount_limit * 100.0,
            false => 0.0,
        };

        match usage_percentage >= NEAR_LIMIT_PERCENTAGE {
            true => Self::NearLimit,
            false => Self::OnTrack,
        }
    }
}
