use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    app::util::time, auth::jwt::models::claims::Claims,
    categories::dtos::create_category_dto::CreateCategoryDto,
    transactions::enums::transaction_type::TransactionType,
};

pub static DEFAULT_INCOME_CATEGORIES: [&str; 4] = ["Salary", "Bonus", "Interest", "Investment"];

pub static DEFAULT_EXPENDITURE_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Rent", "Utilities", "Health"];

pub static DEFAULT_CATEGORY_COLORS: [&str; 8] = [
    "#4285F4", "#DB4437", "#F4B400", "#0F9D58", "#AB47BC", "#00ACC1", "#FF7043", "#9E9D24",
];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: String,
    pub color: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl Category {
    pub fn new(dto: &CreateCategoryDto, claims: &Claims) -> Self {
        Self::with_values(
            &claims.id,
            dto.name.trim(),
            dto.category_type,
            dto.color.trim(),
        )
    }

    fn with_values(user_id: &str, name: &str, category_type: TransactionType, color: &str) -> Self {
        let current_time = time::current_time_in_secs();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            category_type: category_type.value().to_string(),
            color: color.to_string(),
            updated_at: current_time,
            created_at: current_time,
        }
    }

    /// Starter set for a new account. Colors cycle through the palette,
    /// income first and expenditure continuing the count.
    pub fn defaults_for(user_id: &str) -> Vec<Self> {
        let named = DEFAULT_INCOME_CATEGORIES
            .iter()
            .map(|name| (*name, TransactionType::Income))
            .chain(
                DEFAULT_EXPENDITURE_CATEGORIES
                    .iter()
                    .map(|name| (*name, TransactionType::Expenditure)),
            );

        named
            .enumerate()
            .map(|(i, (name, category_type))| {
                let color = DEFAULT_CATEGORY_COLORS[i % DEFAULT_CATEGORY_COLORS.len()];
                Self::with_values(user_id, name, category_type, color)
            })
            .collect()
    }
}
