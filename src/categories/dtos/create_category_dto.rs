use serde::Deserialize;
use validator::Validate;

use crate::transactions::enums::transaction_type::TransactionType;

use super::COLOR_REGEX;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(custom(
        function = "super::validate_category_name",
        message = "name must be between 1 and 64 characters."
    ))]
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
    #[validate(regex(path = "COLOR_REGEX", message = "color must be a hex color."))]
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_name_and_color() {
        let dto: CreateCategoryDto =
            serde_json::from_str(r##"{ "name": " ", "type": "income", "color": "blue" }"##)
                .unwrap();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("color"));
    }

    #[test]
    fn accepts_valid_category() {
        let dto: CreateCategoryDto = serde_json::from_str(
            r##"{ "name": "Freelance", "type": "income", "color": "#0F9D58" }"##,
        )
        .unwrap();

        assert!(dto.validate().is_ok());
        assert_eq!(dto.category_type, TransactionType::Income);
    }
}
