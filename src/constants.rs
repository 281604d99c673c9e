// UI timing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;

// Achievement notification constants
pub const NOTIFICATION_DURATION_SECONDS: f64 = 3.0;
