use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::transactions::enums::transaction_type::TransactionType;

use super::transaction::Transaction;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryBreakdown {
    pub name: String,
    pub value: f64,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TypeTotal {
    pub transaction_type: String,
    pub total_amount: f64,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct TransactionsPage {
    pub results: Vec<Transaction>,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total_results: i64,
    pub total_income: f64,
    pub total_expenditure: f64,
    pub total_transactions: i64,
    pub total_balance: f64,
    pub income_breakdown: Vec<CategoryBreakdown>,
    pub expenditure_breakdown: Vec<CategoryBreakdown>,
}

impl TransactionsPage {
    pub fn new(
        results: Vec<Transaction>,
        page: i64,
        limit: i64,
        totals: &[TypeTotal],
        income_breakdown: Vec<CategoryBreakdown>,
        expenditure_breakdown: Vec<CategoryBreakdown>,
    ) -> Self {
        let mut total_income = 0.0;
        let mut total_expenditure = 0.0;
        let mut total_transactions = 0;

        for total in totals {
            match total.transaction_type.parse::<TransactionType>() {
                Ok(TransactionType::Income) => total_income = total.total_amount,
                Ok(TransactionType::Expenditure) => total_expenditure = total.total_amount,
                Err(_) => {}
            }
            total_transactions += total.count;
        }

        let total_pages = match limit > 0 {
            true => (total_transactions + limit - 1) / limit,
            false => 0,
        };

        Self {
            results,
            page,
            limit,
            total_pages,
            total_results: total_transactions,
            total_income,
            total_expenditure,
            total_transactions,
            total_balance: total_income - total_expenditure,
            income_breakdown,
            expenditure_breakdown,
        }
    }
}
