#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::transactions::{
        NewTransaction, RemoteCategory, RemoteTransaction, Subcategory, Transaction,
        TransactionProviderTrait, TransactionRepositoryTrait, TransactionSyncService,
        TransactionSyncServiceTrait,
    };
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    fn remote(reference_id: &str, date: &str, description: &str, category: &str) -> RemoteTransaction {
        RemoteTransaction {
            reference_id: reference_id.to_string(),
            amount: 500,
            date: date.to_string(),
            description: description.to_string(),
            category: RemoteCategory {
                category_name: category.to_string(),
            },
        }
    }

    // --- Mock TransactionProvider ---
    struct MockTransactionProvider {
        transactions: Option<Vec<RemoteTransaction>>,
    }

    #[async_trait]
    impl TransactionProviderTrait for MockTransactionProvider {
        async fn fetch_transactions(&self) -> Result<Vec<RemoteTransaction>> {
            self.transactions
                .clone()
                .ok_or_else(|| Error::Network("connection refused".to_string()))
        }
    }

    // --- Mock TransactionRepository ---
    #[derive(Clone, Default)]
    struct MockTransactionRepository {
        stored: Arc<Mutex<Vec<Transaction>>>,
        fail_reference_ids: Arc<Mutex<HashSet<String>>>,
    }

    impl MockTransactionRepository {
        fn fail_on(&self, reference_id: &str) {
            self.fail_reference_ids
                .lock()
                .unwrap()
                .insert(reference_id.to_string());
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn find_by_reference_id(&self, reference_id: &str) -> Result<Option<Transaction>> {
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.reference_id == reference_id)
                .cloned())
        }

        async fn insert_if_absent(&self, transaction: NewTransaction) -> Result<bool> {
            if self
                .fail_reference_ids
                .lock()
                .unwrap()
                .contains(&transaction.reference_id)
            {
                return Err(DatabaseError::QueryFailed("disk I/O error".to_string()).into());
            }
            let mut stored = self.stored.lock().unwrap();
            if stored
                .iter()
                .any(|t| t.reference_id == transaction.reference_id)
            {
                return Ok(false);
            }
            let id = format!("tx-{}", stored.len() + 1);
            stored.push(Transaction {
                id: id.clone(),
                reference_id: transaction.reference_id,
                amount: transaction.amount,
                date: transaction.date,
                name: transaction.name,
                subcategory: Subcategory {
                    id: format!("sub-{}", id),
                    name: transaction.subcategory_name,
                },
            });
            Ok(true)
        }

        fn list(&self) -> Result<Vec<Transaction>> {
            Ok(self.stored.lock().unwrap().clone())
        }
    }

    fn service_with(
        transactions: Option<Vec<RemoteTransaction>>,
    ) -> (TransactionSyncService, MockTransactionRepository) {
        let repository = MockTransactionRepository::default();
        let service = TransactionSyncService::new(
            Arc::new(MockTransactionProvider { transactions }),
            Arc::new(repository.clone()),
        );
        (service, repository)
    }

    #[tokio::test]
    async fn test_sync_persists_one_record_per_reference_id() {
        let (service, repository) = service_with(Some(vec![
            remote("A1", "2023-06-01", "Coffee", "food"),
            remote("A2", "2023-06-02", "Train", "travel"),
            remote("A3", "2023-06-03", "Rent", "housing"),
        ]));

        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary.fetched, 3);
        assert_eq!(summary.inserted, 3);
        assert_eq!(summary.skipped_existing, 0);
        assert_eq!(repository.list().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let batch = vec![
            remote("A1", "2023-06-01", "Coffee", "food"),
            remote("A2", "2023-06-02", "Train", "travel"),
        ];
        let (service, repository) = service_with(Some(batch));

        service.sync_transactions().await.unwrap();
        let before = repository.list().unwrap();
        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary.inserted, 0);
        assert_eq!(summary.skipped_existing, 2);
        // Re-running must not duplicate or alter stored records.
        assert_eq!(repository.list().unwrap(), before);
    }

    #[tokio::test]
    async fn test_sync_skips_only_the_record_with_invalid_date() {
        let (service, repository) = service_with(Some(vec![
            remote("A1", "2023-06-01", "Coffee", "food"),
            remote("A2", "06/02/2023", "Train", "travel"),
            remote("A3", "2023-06-03", "Rent", "housing"),
        ]));

        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped_invalid_date, 1);
        let stored = repository.list().unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|t| t.reference_id != "A2"));
    }

    #[tokio::test]
    async fn test_sync_remote_failure_returns_ok_with_empty_summary() {
        let (service, repository) = service_with(None);

        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary, Default::default());
        assert!(repository.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sync_empty_fetch_leaves_store_unchanged() {
        let (service, repository) = service_with(Some(Vec::new()));

        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary.fetched, 0);
        assert_eq!(summary.inserted, 0);
        assert!(repository.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sync_capitalizes_subcategory_name() {
        let (service, repository) =
            service_with(Some(vec![remote("A1", "2023-06-01", "Coffee", "food")]));

        service.sync_transactions().await.unwrap();

        let stored = repository.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, 500);
        assert_eq!(stored[0].name, "Coffee");
        assert_eq!(stored[0].subcategory.name, "Food");
    }

    #[tokio::test]
    async fn test_sync_counts_write_failures_without_raising() {
        let (service, repository) = service_with(Some(vec![
            remote("A1", "2023-06-01", "Coffee", "food"),
            remote("A2", "2023-06-02", "Train", "travel"),
        ]));
        repository.fail_on("A1");

        let summary = service.sync_transactions().await.unwrap();

        assert_eq!(summary.failed_writes, 1);
        assert_eq!(summary.inserted, 1);
        let stored = repository.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].reference_id, "A2");
    }
}
