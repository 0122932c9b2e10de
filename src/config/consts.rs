/// First integer of the default range
pub const DEFAULT_START: i64 = 1;
/// Last integer of the default range (inclusive)
pub const DEFAULT_END: i64 = 100;
/// Label of the first default trigger
pub const FIZZ_LABEL: &str = "Fizz";
/// Label of the second default trigger
pub const BUZZ_LABEL: &str = "Buzz";
/// Divisor of the first default trigger
pub const FIZZ_DIVISOR: i64 = 3;
/// Divisor of the second default trigger
pub const BUZZ_DIVISOR: i64 = 5;
/// Largest number of results that may be held in memory at once
pub const MAX_BUFFERED_RESULTS: u64 = 10_000_000;
/// Slice size used when streaming a range one piece at a time
pub const STREAM_CHUNK_LEN: u64 = 65_536;
