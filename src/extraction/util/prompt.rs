use crate::extraction::models::category_names::CategoryNames;

/// Builds the extraction instruction around the document text.
pub fn build_prompt(text: &str, categories: &CategoryNames) -> String {
    let income = serde_json::to_string(&categories.income).unwrap_or_else(|_| "[]".to_string());
    let expenditure =
        serde_json::to_string(&categories.expenditure).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"
Given the following text, extract all financial transactions with these fields:
- date
- party
- amount
- type ("income" or "expenditure")
- paymentMethod ('cash' or 'card' or 'bank_transfer' or 'upi' or 'other') strictly use this only and choose the most accurate
- category (choose the most accurate)

Special Instructions:
1. The text may either be a **bank statement** (with multiple transactions) or a **bill/receipt** (a single consolidated payment).
2. If it's a **bill or receipt**, consider it as a **single payment**, and extract it as one transaction only.
3. If it's a **bank statement**, extract **each transaction separately**.
4. Do not include "Uncategorized" as a category. Choose the most accurate one from the provided lists.
5. Match the category based on the nature of the transaction:
   - If type is "income", choose from this income list: {income}.
   - If type is "expenditure", choose from this expenditure list: {expenditure}.

Respond ONLY in this JSON array format:
[
  {{
    "date": "01/01/2024",
    "party": "Amazon",
    "paymentMethod": "card",
    "amount": 1200.00,
    "type": "expenditure",
    "category": "Shopping"
  }},
  {{
    "date": "03/03/2024",
    "party": "Biryani Hub",
    "paymentMethod": "upi",
    "amount": 1500.00,
    "type": "expenditure",
    "category": "Food"
  }}
]

Text:
"""{text}"""
"#
    )
}
