use serde::Serialize;
use serde_json::Value;

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResponse {
    Single { transaction: Value },
    Many { transactions: Vec<Value> },
}

impl ExtractionResponse {
    /// A one-element array or a bare value is reported as a single transaction.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(mut items) if items.len() == 1 => Self::Single {
                transaction: items.remove(0),
            },
            Value::Array(items) => Self::Many {
                transactions: items,
            },
            other => Self::Single { transaction: other },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_single_element_array() {
        let response = ExtractionResponse::from_value(json!([{ "party": "Amazon" }]));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "transaction": { "party": "Amazon" } })
        );
    }

    #[test]
    fn keeps_multiple_items_as_list() {
        let response = ExtractionResponse::from_value(json!([{ "amount": 1 }, { "amount": 2 }]));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "transactions": [{ "amount": 1 }, { "amount": 2 }] })
        );
    }

    #[test]
    fn bare_object_is_single() {
        let response = ExtractionResponse::from_value(json!({ "amount": 5 }));

        assert_eq!(
            response,
            ExtractionResponse::Single {
                transaction: json!({ "amount": 5 })
            }
        );
    }

    #[test]
    fn empty_array_is_empty_list() {
        let response = ExtractionResponse::from_value(json!([]));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "transactions": [] })
        );
    }
}
