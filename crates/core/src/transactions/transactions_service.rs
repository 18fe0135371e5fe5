use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, error, info, warn};

use super::transactions_constants::TRANSACTION_DATE_FORMAT;
use super::transactions_model::{
    capitalize_category, NewTransaction, Transaction, TransactionSyncSummary,
};
use super::transactions_traits::{
    TransactionProviderTrait, TransactionRepositoryTrait, TransactionSyncServiceTrait,
};
use crate::errors::Result;

/// Service that pulls transactions from the remote API into the local
/// store, deduplicating by reference id.
pub struct TransactionSyncService {
    provider: Arc<dyn TransactionProviderTrait>,
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionSyncService {
    pub fn new(
        provider: Arc<dyn TransactionProviderTrait>,
        repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            provider,
            repository,
        }
    }
}

#[async_trait]
impl TransactionSyncServiceTrait for TransactionSyncService {
    /// Runs one synchronization pass.
    ///
    /// Never raises: a remote fetch failure aborts the run with an empty
    /// summary, and per-record failures are logged, counted, and skipped.
    /// The returned summary makes the skipped paths observable.
    async fn sync_transactions(&self) -> Result<TransactionSyncSummary> {
        let remote = match self.provider.fetch_transactions().await {
            Ok(remote) => remote,
            Err(e) => {
                error!("Failed to fetch transactions from remote API: {}", e);
                return Ok(TransactionSyncSummary::default());
            }
        };

        let mut summary = TransactionSyncSummary {
            fetched: remote.len(),
            ..Default::default()
        };

        for record in remote {
            let date = match NaiveDate::parse_from_str(&record.date, TRANSACTION_DATE_FORMAT) {
                Ok(date) => date,
                Err(e) => {
                    warn!(
                        "Skipping transaction {}: invalid date '{}': {}",
                        record.reference_id, record.date, e
                    );
                    summary.skipped_invalid_date += 1;
                    continue;
                }
            };

            let new_transaction = NewTransaction {
                reference_id: record.reference_id.clone(),
                amount: record.amount,
                date,
                name: record.description,
                subcategory_name: capitalize_category(&record.category.category_name),
            };

            match self.repository.insert_if_absent(new_transaction).await {
                Ok(true) => summary.inserted += 1,
                Ok(false) => {
                    debug!("Transaction {} already stored", record.reference_id);
                    summary.skipped_existing += 1;
                }
                Err(e) => {
                    error!("Failed to persist transaction {}: {}", record.reference_id, e);
                    summary.failed_writes += 1;
                }
            }
        }

        info!(
            "Transaction sync complete: {} fetched, {} inserted, {} existing, {} invalid dates, {} failed writes",
            summary.fetched,
            summary.inserted,
            summary.skipped_existing,
            summary.skipped_invalid_date,
            summary.failed_writes
        );
        Ok(summary)
    }

    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.repository.list()
    }
}
