use spendwell_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use spendwell_core::Result;

use super::model::{transaction_from_row, NewTransactionDB, SubcategoryDB, TransactionDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{subcategories, transactions};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TransactionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TransactionRepository { pool, writer }
    }

    pub fn list_impl(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .inner_join(subcategories::table)
            .select((TransactionDB::as_select(), SubcategoryDB::as_select()))
            .load::<(TransactionDB, SubcategoryDB)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(transaction_from_row).collect())
    }

    pub fn find_by_reference_id_impl(&self, reference: &str) -> Result<Option<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let row = transactions::table
            .inner_join(subcategories::table)
            .filter(transactions::reference_id.eq(reference))
            .select((TransactionDB::as_select(), SubcategoryDB::as_select()))
            .first::<(TransactionDB, SubcategoryDB)>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(transaction_from_row))
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn find_by_reference_id(&self, reference_id: &str) -> Result<Option<Transaction>> {
        self.find_by_reference_id_impl(reference_id)
    }

    /// Inserts the transaction and its subcategory atomically, unless a row
    /// with the same reference id already exists. Both inserts run inside
    /// the writer actor's immediate transaction.
    async fn insert_if_absent(&self, transaction: NewTransaction) -> Result<bool> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let new_transaction_db = NewTransactionDB {
                    id: Uuid::new_v4().to_string(),
                    reference_id: transaction.reference_id,
                    amount: transaction.amount,
                    transaction_date: transaction.date,
                    name: transaction.name,
                    created_at: Utc::now().naive_utc(),
                };

                // The UNIQUE constraint on reference_id makes the insert a
                // no-op when the record is already stored.
                let inserted = diesel::insert_into(transactions::table)
                    .values(&new_transaction_db)
                    .on_conflict(transactions::reference_id)
                    .do_nothing()
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if inserted == 0 {
                    return Ok(false);
                }

                let subcategory_db = SubcategoryDB {
                    id: Uuid::new_v4().to_string(),
                    transaction_id: new_transaction_db.id,
                    name: transaction.subcategory_name,
                };
                diesel::insert_into(subcategories::table)
                    .values(&subcategory_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(true)
            })
            .await
    }

    fn list(&self) -> Result<Vec<Transaction>> {
        self.list_impl()
    }
}
