use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expenditure,
}

impl TransactionType {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Income => "income",
            Self::Expenditure => "expenditure",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expenditure" => Ok(Self::Expenditure),
            other => Err(format!("invalid transaction type: {}", other)),
        }
    }
}
