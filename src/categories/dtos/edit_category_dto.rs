use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::time},
    transactions::enums::transaction_type::TransactionType,
};

use super::COLOR_REGEX;

#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryDto {
    #[validate(custom(
        function = "super::validate_category_name",
        message = "name must be between 1 and 64 characters."
    ))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<TransactionType>,
    #[validate(regex(path = "COLOR_REGEX", message = "color must be a hex color."))]
    pub color: Option<String>,
}

impl EditCategoryDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE categories SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.name.is_some() {
            clauses.push(["name = $", &index.to_string()].concat());
            index += 1;
        }
        if self.category_type.is_some() {
            clauses.push(["category_type = $", &index.to_string()].concat());
            index += 1;
        }
        if self.color.is_some() {
            clauses.push(["color = $", &index.to_string()].concat());
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
