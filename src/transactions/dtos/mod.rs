use validator::ValidationError;

use crate::app::util::time;

pub mod create_transaction_dto;
pub mod edit_transaction_dto;
pub mod get_transaction_stats_dto;
pub mod get_transactions_filter_dto;

pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    match time::parse_iso_to_secs(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("iso_date")),
    }
}
