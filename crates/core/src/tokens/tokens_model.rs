use serde::{Deserialize, Serialize};

/// An access token scoped to a single connected bank.
///
/// The remote API returns one of these per linked institution; the full
/// list is persisted as a single document in the secure store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccessToken {
    pub access_token: String,
    pub bank_id: String,
}
