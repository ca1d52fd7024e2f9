use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

use crate::transactions::enums::transaction_type::TransactionType;

#[derive(Debug, Clone, FromRow)]
pub struct StatsRow {
    pub bucket: String,
    pub transaction_type: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionStat {
    pub date: String,
    pub income: f64,
    pub expenditure: f64,
}

impl TransactionStat {
    /// One entry per bucket that has data, ascending by bucket.
    pub fn from_rows(rows: Vec<StatsRow>) -> Vec<Self> {
        let mut buckets: BTreeMap<String, (f64, f64)> = BTreeMap::new();

        for row in rows {
            let Ok(transaction_type) = row.transaction_type.parse::<TransactionType>() else {
                continue;
            };

            let entry = buckets.entry(row.bucket).or_insert((0.0, 0.0));
            match transaction_type {
                TransactionType::Income => entry.0 += row.total_amount,
                TransactionType::Expenditure => entry.1 += row.total_amount,
            }
        }

        buckets
            .into_iter()
            .map(|(date, (income, expenditure))| Self {
                date,
                income,
                expenditure,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bucket: &str, transaction_type: &str, total_amount: f64) -> StatsRow {
        StatsRow {
            bucket: bucket.to_string(),
            transaction_type: transaction_type.to_string(),
            total_amount,
        }
    }

    #[test]
    fn merges_types_per_bucket_in_order() {
        let stats = TransactionStat::from_rows(vec![
            row("2024-03", "expenditure", 40.0),
            row("2024-01", "income", 100.0),
            row("2024-03", "income", 10.0),
            row("2024-01", "expenditure", 25.5),
        ]);

        assert_eq!(
            stats,
            vec![
                TransactionStat {
                    date: "2024-01".to_string(),
                    income: 100.0,
                    expenditure: 25.5,
                },
                TransactionStat {
                    date: "2024-03".to_string(),
                    income: 10.0,
                    expenditure: 40.0,
                },
            ]
        );
    }

    #[test]
    fn missing_type_defaults_to_zero() {
        let stats = TransactionStat::from_rows(vec![row("2024", "expenditure", 9.0)]);

        assert_eq!(stats[0].income, 0.0);
        assert_eq!(stats[0].expenditure, 9.0);
    }

    #[test]
    fn no_rows_no_buckets() {
        assert!(TransactionStat::from_rows(Vec::new()).is_empty());
    }
}
