use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::time},
    transactions::enums::{payment_method::PaymentMethod, transaction_type::TransactionType},
};

#[derive(Debug, Deserialize, Validate)]
pub struct EditTransactionDto {
    #[validate(length(max = 256, message = "party must be at most 256 characters."))]
    pub party: Option<String>,
    #[validate(custom(
        function = "crate::categories::dtos::validate_category_name",
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    #[validate(length(
        min = 1,
        max = 8,
        message = "currency must be between 1 and 8 characters."
    ))]
    pub currency: Option<String>,
    #[validate(range(min = 0.0, message = "amount must be greater than or equal to 0."))]
    pub amount: Option<f64>,
    #[serde(alias = "paymentMethod")]
    pub payment_method: Option<PaymentMethod>,
    #[validate(length(max = 1024, message = "description must be at most 1024 characters."))]
    pub description: Option<String>,
    #[serde(alias = "createdAt")]
    #[validate(custom(
        function = "super::validate_iso_date",
        message = "created_at must be an ISO 8601 date."
    ))]
    pub created_at: Option<String>,
}

impl EditTransactionDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE transactions SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.party.is_some() {
            clauses.push(["party = NULLIF($", &index.to_string(), ", '')"].concat());
            index += 1;
        }
        if self.category.is_some() {
            clauses.push(["category = $", &index.to_string()].concat());
            index += 1;
        }
        if self.transaction_type.is_some() {
            clauses.push(["transaction_type = $", &index.to_string()].concat());
            index += 1;
        }
        if self.currency.is_some() {
            clauses.push(["currency = $", &index.to_string()].concat());
            index += 1;
        }
        if self.amount.is_some() {
            clauses.push(["amount = $", &index.to_string()].concat());
            index += 1;
        }
        if self.payment_method.is_some() {
            clauses.push(["payment_method = $", &index.to_string()].concat());
            index += 1;
        }
        if self.description.is_some() {
            clauses.push(["description = NULLIF($", &index.to_string(), ", '')"].concat());
            index += 1;
        }
        if self.created_at.is_some() {
            clauses.push(["created_at = $", &index.to_string()].concat());
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
