use serde::Deserialize;

use crate::transactions::enums::transaction_type::TransactionType;

#[derive(Debug, Default, Deserialize)]
pub struct GetCategoriesFilterDto {
    #[serde(rename = "type")]
    pub category_type: Option<TransactionType>,
}

impl GetCategoriesFilterDto {
    pub fn to_sql(&self) -> String {
        let mut sql = "SELECT * FROM categories WHERE user_id = $1".to_string();

        if self.category_type.is_some() {
            sql.push_str(" AND category_type = $2");
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC");

        tracing::debug!(sql);

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_is_optional() {
        assert_eq!(
            GetCategoriesFilterDto::default().to_sql(),
            "SELECT * FROM categories WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );

        let dto = GetCategoriesFilterDto {
            category_type: Some(TransactionType::Income),
        };
        assert!(dto.to_sql().contains("AND category_type = $2"));
    }
}
