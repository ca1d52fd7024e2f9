use serde::Serialize;

use crate::{
    categories::models::category::Category,
    transactions::enums::transaction_type::TransactionType,
};

/// The owner's category names split by type, offered to the model as choices.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CategoryNames {
    pub income: Vec<String>,
    pub expenditure: Vec<String>,
}

impl CategoryNames {
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut names = Self::default();

        for category in categories {
            match category.category_type.parse::<TransactionType>() {
                Ok(TransactionType::Income) => names.income.push(category.name.to_string()),
                Ok(TransactionType::Expenditure) => {
                    names.expenditure.push(category.name.to_string())
                }
                Err(_) => {}
            }
        }

        names
    }
}
