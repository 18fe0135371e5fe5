use async_trait::async_trait;

use super::transactions_model::{
    NewTransaction, RemoteTransaction, Transaction, TransactionSyncSummary,
};
use crate::errors::Result;

/// Trait for fetching transactions from the remote API.
#[async_trait]
pub trait TransactionProviderTrait: Send + Sync {
    async fn fetch_transactions(&self) -> Result<Vec<RemoteTransaction>>;
}

/// Trait defining the contract for transaction storage.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn find_by_reference_id(&self, reference_id: &str) -> Result<Option<Transaction>>;

    /// Inserts the transaction and its subcategory in one write
    /// transaction, unless a record with the same reference id already
    /// exists. Returns `true` when a row was inserted.
    async fn insert_if_absent(&self, transaction: NewTransaction) -> Result<bool>;

    fn list(&self) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for transaction synchronization.
#[async_trait]
pub trait TransactionSyncServiceTrait: Send + Sync {
    async fn sync_transactions(&self) -> Result<TransactionSyncSummary>;
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
}
