use validator::ValidationError;

pub mod create_budget_dto;
pub mod edit_budget_dto;
pub mod get_budgets_filter_dto;

pub fn validate_amount_limit(value: f64) -> Result<(), ValidationError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(()),
        false => Err(ValidationError::new("amount_limit")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_limit_must_be_positive() {
        assert!(validate_amount_limit(0.01).is_ok());
        assert!(validate_amount_limit(0.0).is_err());
        assert!(validate_amount_limit(-5.0).is_err());
    }
}
