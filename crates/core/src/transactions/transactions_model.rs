use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A transaction as returned by the remote bank API.
///
/// Amounts are integer minor currency units; the date is the raw string
/// from the wire and is parsed during synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTransaction {
    pub reference_id: String,
    pub amount: i64,
    pub date: String,
    pub description: String,
    pub category: RemoteCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCategory {
    pub category_name: String,
}

/// A locally stored transaction with its subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub reference_id: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub name: String,
    pub subcategory: Subcategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
}

/// Input for persisting a new transaction. Ids and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub reference_id: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub name: String,
    pub subcategory_name: String,
}

/// Outcome counters for one synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSyncSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub skipped_existing: usize,
    pub skipped_invalid_date: usize,
    pub failed_writes: usize,
}

/// Capitalizes each whitespace-separated word: `"food"` becomes `"Food"`,
/// `"food & drink"` becomes `"Food & Drink"`.
pub fn capitalize_category(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
