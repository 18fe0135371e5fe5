pub mod model;
pub mod repository;

pub use model::{NewTransactionDB, SubcategoryDB, TransactionDB};
pub use repository::TransactionRepository;
