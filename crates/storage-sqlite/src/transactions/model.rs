//! Database models for transactions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for transactions
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub reference_id: String,
    pub amount: i64,
    pub transaction_date: NaiveDate,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting a transaction
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionDB {
    pub id: String,
    pub reference_id: String,
    pub amount: i64,
    pub transaction_date: NaiveDate,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Database model for subcategories
#[derive(
    Insertable,
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(TransactionDB, foreign_key = transaction_id))]
#[diesel(table_name = crate::schema::subcategories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDB {
    pub id: String,
    pub transaction_id: String,
    pub name: String,
}

// Conversion to domain models.
//
// Expressed as a free function rather than a `From` impl: the orphan rule
// forbids implementing the foreign `From` trait for the foreign
// `spendwell_core::transactions::Transaction` type from a tuple of local
// types. The conversion itself is unchanged.
pub(crate) fn transaction_from_row(
    (tx, sub): (TransactionDB, SubcategoryDB),
) -> spendwell_core::transactions::Transaction {
    spendwell_core::transactions::Transaction {
        id: tx.id,
        reference_id: tx.reference_id,
        amount: tx.amount,
        date: tx.transaction_date,
        name: tx.name,
        subcategory: spendwell_core::transactions::Subcategory {
            id: sub.id,
            name: sub.name,
        },
    }
}
