use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
    transactions::{
        enums::{payment_method::PaymentMethod, transaction_type::TransactionType},
        models::transaction::TRANSACTION_SORTABLE_FIELDS,
    },
};

pub static DEFAULT_PAGE_LIMIT: i64 = 10;
pub static MAX_PAGE: i64 = 1_000_000;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct GetTransactionsFilterDto {
    #[validate(length(
        min = 1,
        max = 64,
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    #[validate(length(max = 256, message = "party must be at most 256 characters."))]
    pub party: Option<String>,
    pub amount: Option<f64>,
    #[serde(alias = "paymentMethod")]
    pub payment_method: Option<String>,
    #[serde(alias = "fromDate")]
    pub from_date: Option<String>,
    #[serde(alias = "toDate")]
    pub to_date: Option<String>,
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
    #[validate(range(min = 1, max = 1_000_000, message = "page must be between 1 and 1000000."))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100."))]
    pub limit: Option<i64>,
}

/// Normalized, owner-scoped listing filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsFilter {
    pub user_id: String,
    pub category: Option<String>,
    pub transaction_type: Option<TransactionType>,
    /// Already wrapped for `ILIKE`.
    pub party_pattern: Option<String>,
    pub amount: Option<f64>,
    pub payment_methods: Option<Vec<String>>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub sort_field: String,
    pub sort_order: String,
    pub page: i64,
    pub limit: i64,
}

impl GetTransactionsFilterDto {
    pub fn to_filter(&self, claims: &Claims) -> Result<TransactionsFilter, ApiError> {
        let payment_methods = match &self.payment_method {
            Some(raw) if !raw.trim().is_empty() => {
                let methods = PaymentMethod::parse_list(raw).map_err(|_| ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Invalid payment method.".to_string(),
                })?;

                match methods.is_empty() {
                    true => None,
                    false => Some(methods.iter().map(|m| m.value().to_string()).collect()),
                }
            }
            _ => None,
        };

        let from = match &self.from_date {
            Some(from_date) => Some(parse_date_param(from_date, "from_date", false)?),
            None => None,
        };
        let to = match &self.to_date {
            Some(to_date) => Some(parse_date_param(to_date, "to_date", true)?),
            None => None,
        };

        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "to_date must not be earlier than from_date.".to_string(),
                });
            }
        }

        let (sort_field, sort_order) = parse_sort_by(self.sort_by.as_deref())?;

        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if page < 1 || page > MAX_PAGE || (page - 1).checked_mul(limit).is_none() {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "page must be between 1 and 1000000.".to_string(),
            });
        }

        Ok(TransactionsFilter {
            user_id: claims.id.to_string(),
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .map(str::to_string),
            transaction_type: self.transaction_type,
            party_pattern: self
                .party
                .as_deref()
                .map(str::trim)
                .filter(|party| !party.is_empty())
                .map(|party| ["%", &escape_like(party), "%"].concat()),
            amount: self.amount,
            payment_methods,
            from,
            to,
            sort_field,
            sort_order,
            page,
            limit,
        })
    }
}

/// A bare `YYYY-MM-DD` upper bound covers the whole day.
fn parse_date_param(value: &str, field: &str, end_of_day: bool) -> Result<i64, ApiError> {
    let Some(secs) = time::parse_iso_to_secs(value) else {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: [field, " must be an ISO 8601 date."].concat(),
        });
    };

    let is_date_only = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok();

    match end_of_day && is_date_only {
        true => Ok(secs + 86_399),
        false => Ok(secs),
    }
}

fn parse_sort_by(sort_by: Option<&str>) -> Result<(String, String), ApiError> {
    let Some(sort_by) = sort_by.filter(|s| !s.trim().is_empty()) else {
        return Ok(("created_at".to_string(), "DESC".to_string()));
    };

    let sort_params: Vec<&str> = sort_by.split(':').collect();

    if sort_params.len() != 2 {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Malformed sort query.".to_string(),
        });
    }
    if !TRANSACTION_SORTABLE_FIELDS.contains(&sort_params[0].trim()) {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Invalid sort field.".to_string(),
        });
    }

    let sort_order = sort_params[1].trim().to_uppercase();
    if sort_order != "ASC" && sort_order != "DESC" {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "Malformed sort query.".to_string(),
        });
    }

    Ok((sort_params[0].trim().to_string(), sort_order))
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl TransactionsFilter {
    /// Builds the `WHERE` clause. Binds follow the same order:
    /// user_id, category, type, party, amount, payment methods, from, to.
    pub fn where_sql(&self, include_type: bool) -> String {
        let mut clauses = vec!["user_id = $1".to_string()];

        let mut index: u8 = 1;

        if self.category.is_some() {
            index += 1;
            clauses.push(["category = $", &index.to_string()].concat());
        }
        if include_type && self.transaction_type.is_some() {
            index += 1;
            clauses.push(["transaction_type = $", &index.to_string()].concat());
        }
        if self.party_pattern.is_some() {
            index += 1;
            clauses.push(["party ILIKE $", &index.to_string()].concat());
        }
        if self.amount.is_some() {
            index += 1;
            clauses.push(["amount = $", &index.to_string()].concat());
        }
        if self.payment_methods.is_some() {
            index += 1;
            clauses.push(["payment_method = ANY($", &index.to_string(), ")"].concat());
        }
        if self.from.is_some() {
            index += 1;
            clauses.push(["created_at >= $", &index.to_string()].concat());
        }
        if self.to.is_some() {
            index += 1;
            clauses.push(["created_at <= $", &index.to_string()].concat());
        }

        [" WHERE ", &clauses.join(" AND ")].concat()
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn page_sql(&self) -> String {
        let mut sql = "SELECT * FROM transactions".to_string();

        sql.push_str(&self.where_sql(true));

        // ORDER BY
        sql.push_str(
            &[
                " ORDER BY ",
                &self.sort_field,
                " ",
                &self.sort_order,
                " NULLS LAST, id ",
                &self.sort_order,
            ]
            .concat(),
        );

        // LIMIT
        sql.push_str(
            &[
                " LIMIT ",
                &self.limit.to_string(),
                " OFFSET ",
                &self.offset().to_string(),
            ]
            .concat(),
        );

        tracing::debug!(sql);

        sql
    }

    pub fn totals_sql(&self) -> String {
        let sql = [
            "SELECT transaction_type, COALESCE(SUM(amount), 0)::float8 AS total_amount, COUNT(*) AS count FROM transactions",
            &self.where_sql(true),
            " GROUP BY transaction_type",
        ]
        .concat();

        tracing::debug!(sql);

        sql
    }

    /// Ignores the requested type, the breakdown type takes its place.
    pub fn breakdown_sql(&self, transaction_type: TransactionType) -> String {
        let sql = [
            "SELECT category AS name, COALESCE(SUM(amount), 0)::float8 AS value, COUNT(*) AS count FROM transactions",
            &self.where_sql(false),
            " AND transaction_type = '",
            transaction_type.value(),
            "' GROUP BY category ORDER BY value DESC, name ASC",
        ]
        .concat();

        tracing::debug!(sql);

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Claims {
        Claims {
            id: "owner".to_string(),
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn defaults_to_newest_first() {
        let filter = GetTransactionsFilterDto::default()
            .to_filter(&claims())
            .unwrap();

        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 10);
        assert_eq!(
            filter.page_sql(),
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY created_at DESC NULLS LAST, id DESC LIMIT 10 OFFSET 0"
        );
    }

    #[test]
    fn numbers_placeholders_in_bind_order() {
        let dto = GetTransactionsFilterDto {
            category: Some("Food".to_string()),
            transaction_type: Some(TransactionType::Expenditure),
            party: Some("zom".to_string()),
            payment_method: Some("upi,card".to_string()),
            to_date: Some("2024-03-31".to_string()),
            ..Default::default()
        };

        let filter = dto.to_filter(&claims()).unwrap();

        assert_eq!(
            filter.where_sql(true),
            " WHERE user_id = $1 AND category = $2 AND transaction_type = $3 AND party ILIKE $4 AND payment_method = ANY($5) AND created_at <= $6"
        );
        assert_eq!(
            filter.where_sql(false),
            " WHERE user_id = $1 AND category = $2 AND party ILIKE $3 AND payment_method = ANY($4) AND created_at <= $5"
        );
        assert_eq!(filter.party_pattern.as_deref(), Some("%zom%"));
        assert_eq!(
            filter.payment_methods,
            Some(vec!["upi".to_string(), "card".to_string()])
        );
    }

    #[test]
    fn breakdown_replaces_type_filter() {
        let dto = GetTransactionsFilterDto {
            transaction_type: Some(TransactionType::Income),
            ..Default::default()
        };

        let sql = dto
            .to_filter(&claims())
            .unwrap()
            .breakdown_sql(TransactionType::Expenditure);

        assert!(sql.contains(" WHERE user_id = $1 AND transaction_type = 'expenditure'"));
        assert!(sql.ends_with("GROUP BY category ORDER BY value DESC, name ASC"));
    }

    #[test]
    fn date_only_upper_bound_is_inclusive_of_the_day() {
        let dto = GetTransactionsFilterDto {
            from_date: Some("2024-01-01".to_string()),
            to_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };

        let filter = dto.to_filter(&claims()).unwrap();

        assert_eq!(filter.from, Some(1704067200));
        assert_eq!(filter.to, Some(1704067200 + 86_399));
    }

    #[test]
    fn rejects_inverted_date_range() {
        let dto = GetTransactionsFilterDto {
            from_date: Some("2024-02-01".to_string()),
            to_date: Some("2024-01-01T10:00:00Z".to_string()),
            ..Default::default()
        };

        assert_eq!(
            dto.to_filter(&claims()).unwrap_err().code,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn validates_sort_by() {
        let sort = |value: &str| parse_sort_by(Some(value));

        assert_eq!(
            sort("amount:asc").unwrap(),
            ("amount".to_string(), "ASC".to_string())
        );
        assert!(sort("amount").is_err());
        assert!(sort("password_hash:asc").is_err());
        assert!(sort("amount:sideways").is_err());
    }

    #[test]
    fn paginates_with_offset() {
        let dto = GetTransactionsFilterDto {
            page: Some(3),
            limit: Some(25),
            sort_by: Some("party:asc".to_string()),
            ..Default::default()
        };

        let sql = dto.to_filter(&claims()).unwrap().page_sql();

        assert!(sql.ends_with("ORDER BY party ASC NULLS LAST, id ASC LIMIT 25 OFFSET 50"));
    }

    #[test]
    fn oversized_page_is_rejected() {
        let dto = GetTransactionsFilterDto {
            page: Some(i64::MAX),
            limit: Some(100),
            ..Default::default()
        };

        assert!(dto.validate().is_err());
        assert_eq!(
            dto.to_filter(&claims()).unwrap_err().code,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn last_allowed_page_has_offset() {
        let dto = GetTransactionsFilterDto {
            page: Some(MAX_PAGE),
            limit: Some(100),
            ..Default::default()
        };

        assert!(dto.validate().is_ok());

        let filter = dto.to_filter(&claims()).unwrap();

        assert_eq!(filter.offset(), 99_999_900);
    }

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn invalid_payment_method_is_bad_request() {
        let dto = GetTransactionsFilterDto {
            payment_method: Some("cheque".to_string()),
            ..Default::default()
        };

        assert_eq!(
            dto.to_filter(&claims()).unwrap_err().code,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn empty_payment_method_list_is_no_filter() {
        for raw in [",", "[]", " , "] {
            let dto = GetTransactionsFilterDto {
                payment_method: Some(raw.to_string()),
                ..Default::default()
            };

            let filter = dto.to_filter(&claims()).unwrap();

            assert_eq!(filter.payment_methods, None);
            assert_eq!(filter.where_sql(true), " WHERE user_id = $1");
        }
    }

    #[test]
    fn limit_above_max_fails_validation() {
        let dto = GetTransactionsFilterDto {
            limit: Some(101),
            ..Default::default()
        };

        assert!(dto.validate().is_err());
    }
}
