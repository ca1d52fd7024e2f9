use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, auth::jwt::models::claims::Claims,
    transactions::dtos::create_transaction_dto::CreateTransactionDto,
};

pub static TRANSACTION_SORTABLE_FIELDS: [&str; 5] =
    ["created_at", "updated_at", "amount", "party", "category"];

pub static DEFAULT_CURRENCY: &str = "INR";

pub static DEFAULT_CATEGORY: &str = "Others";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub currency: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub payment_method: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Transaction {
    /// `created_at` must already be validated; an unparsable value falls back to now.
    pub fn new(dto: &CreateTransactionDto, claims: &Claims) -> Self {
        let current_time = time::current_time_in_secs();
        let created_at = dto
            .created_at
            .as_deref()
            .and_then(time::parse_iso_to_secs)
            .unwrap_or(current_time);

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: claims.id.to_string(),
            party: dto
                .party
                .as_deref()
                .map(str::trim)
                .filter(|party| !party.is_empty())
                .map(str::to_string),
            category: dto
                .category
                .as_deref()
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            transaction_type: dto.transaction_type.value().to_string(),
            currency: dto
                .currency
                .as_deref()
                .map(str::trim)
                .filter(|currency| !currency.is_empty())
                .unwrap_or(DEFAULT_CURRENCY)
                .to_uppercase(),
            amount: dto.amount,
            description: dto.description.clone().filter(|d| !d.is_empty()),
            payment_method: dto.payment_method.unwrap_or_default().value().to_string(),
            updated_at: current_time,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transactions::enums::{
        payment_method::PaymentMethod, transaction_type::TransactionType,
    };

    use super::*;

    fn claims() -> Claims {
        Claims {
            id: "3f1c9a8e-2b1d-4e5f-8a7b-6c5d4e3f2a1b".to_string(),
            iat: 0,
            exp: 0,
        }
    }

    fn dto() -> CreateTransactionDto {
        CreateTransactionDto {
            party: Some("  Amazon ".to_string()),
            category: Some(" Shopping".to_string()),
            payment_method: None,
            transaction_type: TransactionType::Expenditure,
            currency: None,
            amount: 1200.0,
            description: Some(String::new()),
            created_at: Some("2024-01-01".to_string()),
        }
    }

    #[test]
    fn applies_defaults_and_trims() {
        let transaction = Transaction::new(&dto(), &claims());

        assert_eq!(transaction.party.as_deref(), Some("Amazon"));
        assert_eq!(transaction.category, "Shopping");
        assert_eq!(transaction.currency, "INR");
        assert_eq!(transaction.payment_method, "cash");
        assert_eq!(transaction.transaction_type, "expenditure");
        assert_eq!(transaction.description, None);
        assert_eq!(transaction.created_at, 1704067200);
        assert_eq!(transaction.user_id, claims().id);
    }

    #[test]
    fn keeps_explicit_values() {
        let mut dto = dto();
        dto.payment_method = Some(PaymentMethod::Upi);
        dto.currency = Some("usd".to_string());
        dto.created_at = None;
        dto.category = None;

        let transaction = Transaction::new(&dto, &claims());

        assert_eq!(transaction.payment_method, "upi");
        assert_eq!(transaction.currency, "USD");
        assert_eq!(transaction.category, "Others");
        assert_eq!(transaction.created_at, transaction.updated_at);
    }

    #[test]
    fn serializes_type_field_name() {
        let value = serde_json::to_value(Transaction::new(&dto(), &claims())).unwrap();

        assert_eq!(value["type"], "expenditure");
        assert!(value.get("transaction_type").is_none());
        assert!(value.get("description").is_none());
    }
}
