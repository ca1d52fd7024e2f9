use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::app::{models::api_error::ApiError, util::time};

use super::DISPLAYNAME_REGEX;

#[derive(Debug, Deserialize, Validate)]
pub struct EditUserDto {
    #[validate(regex(
        path = "DISPLAYNAME_REGEX",
        message = "displayname must be between 1 and 48 characters."
    ))]
    pub displayname: Option<String>,
}

impl EditUserDto {
    pub fn to_sql(&self) -> Result<String, ApiError> {
        let mut sql = "UPDATE users SET ".to_string();
        let mut clauses = Vec::new();

        let mut index: u8 = 1;

        // SET CLAUSES
        if self.displayname.is_some() {
            clauses.push(["displayname = $", &index.to_string()].concat());
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
        sql.push_str(" RETURNING *");

        tracing::debug!(sql);

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_update_with_trailing_id_param() {
        let dto = EditUserDto {
            displayname: Some("Jane".to_string()),
        };

        let sql = dto.to_sql().unwrap();

        assert!(sql.starts_with("UPDATE users SET displayname = $1, updated_at = "));
        assert!(sql.ends_with(" WHERE id = $2 RETURNING *"));
    }

    #[test]
    fn empty_edit_is_rejected() {
        let dto = EditUserDto { displayname: None };

        assert_eq!(dto.to_sql().unwrap_err().code, StatusCode::BAD_REQUEST);
    }
}
