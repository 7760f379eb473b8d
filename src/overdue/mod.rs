pub mod aging;
pub mod late_fees;
pub mod status;

use chrono::{DateTime, Duration, Utc};

pub use aging::{calculate_aging_buckets, AgingBucket, AgingBuckets};
pub use late_fees::{calculate_late_fees, LateFeeEngine};
pub use status::{calculate_overdue_status, OverdueStatus, OverdueTracker};

/// whole days from `from` to `to`, rounded down
pub(crate) fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let elapsed = to - from;
    let days = elapsed.num_days();
    if elapsed < Duration::days(days) {
        days - 1
    } else {
        days
    }
}
