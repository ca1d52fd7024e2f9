use serde::Deserialize;
use validator::Validate;

use crate::transactions::enums::{payment_method::PaymentMethod, transaction_type::TransactionType};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransactionDto {
    #[validate(length(max = 256, message = "party must be at most 256 characters."))]
    pub party: Option<String>,
    #[validate(length(
        min = 1,
        max = 64,
        message = "category must be between 1 and 64 characters."
    ))]
    pub category: Option<String>,
    #[serde(alias = "paymentMethod")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[validate(length(
        min = 1,
        max = 8,
        message = "currency must be between 1 and 8 characters."
    ))]
    pub currency: Option<String>,
    #[validate(range(min = 0.0, message = "amount must be greater than or equal to 0."))]
    pub amount: f64,
    #[validate(length(max = 1024, message = "description must be at most 1024 characters."))]
    pub description: Option<String>,
    #[serde(alias = "createdAt")]
    #[validate(custom(
        function = "super::validate_iso_date",
        message = "created_at must be an ISO 8601 date."
    ))]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_aliases() {
        let dto: CreateTransactionDto = serde_json::from_str(
            r#"{
                "party": "Biryani Hub",
                "category": "Food",
                "paymentMethod": "upi",
                "type": "expenditure",
                "amount": 1500.0,
                "createdAt": "2024-03-03T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(dto.payment_method, Some(PaymentMethod::Upi));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_negative_amount_and_bad_date() {
        let dto: CreateTransactionDto = serde_json::from_str(
            r#"{
                "category": "Salary",
                "type": "income",
                "amount": -1,
                "created_at": "03/03/2024"
            }"#,
        )
        .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("amount"));
        assert!(fields.contains_key("created_at"));
    }

    #[test]
    fn category_is_optional() {
        let dto: CreateTransactionDto =
            serde_json::from_str(r#"{ "type": "income", "amount": 10 }"#).unwrap();

        assert!(dto.category.is_none());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn unknown_enum_values_fail_to_deserialize() {
        let result = serde_json::from_str::<CreateTransactionDto>(
            r#"{ "category": "Food", "type": "refund", "amount": 1 }"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<CreateTransactionDto>(
            r#"{ "category": "Food", "type": "income", "amount": 1, "payment_method": "cheque" }"#,
        );
        assert!(result.is_err());
    }
}
