/// Maximum length of a status remark, in characters
pub const MAX_REMARK_LENGTH: usize = 150;

/// Canned reasons accepted as the remark when dismissing a report.
/// A dismissal remark must match one of these exactly.
pub const DISMISSAL_REASONS: &[&str] = &[
    "Duplicate report",
    "Insufficient information",
    "Not an infrastructure issue",
    "Outside coverage area",
    "Reported in error",
];

/// Attempts per notification write before giving up
pub const NOTIFICATION_WRITE_ATTEMPTS: u32 = 2;

/// Backoff between notification write attempts, in milliseconds
pub const NOTIFICATION_RETRY_BACKOFF_MS: u64 = 100;
