//! Size and time multipliers.

use std::time::Duration;

// ============================================================================
// File sizes (bytes)
// ============================================================================

/// 1024 bytes.
pub const KB: u64 = 1024;
/// 1024 KB.
pub const MB: u64 = KB * 1024;
/// 1024 MB.
pub const GB: u64 = MB * 1024;
/// 1024 GB.
pub const TB: u64 = GB * 1024;
/// Largest accepted upload (10 MB).
pub const MAX_UPLOAD_SIZE: u64 = 10 * MB;
/// Largest accepted image (5 MB).
pub const MAX_IMAGE_SIZE: u64 = 5 * MB;

// ============================================================================
// Time (milliseconds)
// ============================================================================

/// One second.
pub const SECOND: u64 = 1000;
/// One minute.
pub const MINUTE: u64 = 60 * SECOND;
/// One hour.
pub const HOUR: u64 = 60 * MINUTE;
/// One day.
pub const DAY: u64 = 24 * HOUR;
/// Seven days.
pub const WEEK: u64 = 7 * DAY;
/// Thirty days.
pub const MONTH: u64 = 30 * DAY;
/// 365 days.
pub const YEAR: u64 = 365 * DAY;

/// A millisecond constant as a [`Duration`].
pub const fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// File size table, for listing.
pub const FILE_SIZES: [(&str, u64); 6] = [
    ("KB", KB),
    ("MB", MB),
    ("GB", GB),
    ("TB", TB),
    ("MAX_UPLOAD_SIZE", MAX_UPLOAD_SIZE),
    ("MAX_IMAGE_SIZE", MAX_IMAGE_SIZE),
];

/// Time table, for listing.
pub const TIME: [(&str, u64); 7] = [
    ("SECOND", SECOND),
    ("MINUTE", MINUTE),
    ("HOUR", HOUR),
    ("DAY", DAY),
    ("WEEK", WEEK),
    ("MONTH", MONTH),
    ("YEAR", YEAR),
];
