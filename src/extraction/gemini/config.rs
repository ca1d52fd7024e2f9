pub static MAX_ATTEMPTS: usize = 3;
pub static BACKOFF_BASE_MILLIS: u64 = 2;
pub static BACKOFF_FACTOR: u64 = 250;
pub static MAX_BACKOFF_SECS: u64 = 4;
