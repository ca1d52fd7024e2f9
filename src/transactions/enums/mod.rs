pub mod payment_method;
pub mod stats_period;
pub mod transaction_type;
