pub mod transaction;
pub mod transaction_stat;
pub mod transactions_page;
