/// Date format used by the remote API for transaction dates.
pub const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d";
