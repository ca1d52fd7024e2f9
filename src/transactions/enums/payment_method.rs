use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    BankTransfer,
    Upi,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        Self::Cash,
        Self::Card,
        Self::BankTransfer,
        Self::Upi,
        Self::Other,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::Upi => "upi",
            Self::Other => "other",
        }
    }

    /// Parses a single value, a comma separated list, or a JSON array string.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, String> {
        let raw = raw.trim();

        let values: Vec<String> = if raw.starts_with('[') {
            serde_json::from_str(raw).map_err(|e| e.to_string())?
        } else {
            raw.split(',').map(|value| value.to_string()).collect()
        };

        let mut methods = Vec::new();
        for value in values.iter().filter(|value| !value.trim().is_empty()) {
            let method = value.parse::<Self>()?;
            if !methods.contains(&method) {
                methods.push(method);
            }
        }

        Ok(methods)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|method| method.value() == s)
            .ok_or_else(|| format!("invalid payment method: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_value() {
        assert_eq!(PaymentMethod::parse_list("upi").unwrap(), vec![PaymentMethod::Upi]);
    }

    #[test]
    fn parses_comma_list_and_drops_duplicates() {
        assert_eq!(
            PaymentMethod::parse_list("card, bank_transfer,card").unwrap(),
            vec![PaymentMethod::Card, PaymentMethod::BankTransfer]
        );
    }

    #[test]
    fn parses_json_array() {
        assert_eq!(
            PaymentMethod::parse_list(r#"["cash","other"]"#).unwrap(),
            vec![PaymentMethod::Cash, PaymentMethod::Other]
        );
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(PaymentMethod::parse_list("cheque").is_err());
        assert!(PaymentMethod::parse_list(r#"["cash", "#).is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
    }
}
