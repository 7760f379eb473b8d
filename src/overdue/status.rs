use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::OverduePolicy;
use crate::overdue::whole_days_between;
use crate::types::Severity;

/// days past the grace period after which an account is critical
pub const DEFAULT_CRITICAL_WINDOW_DAYS: u32 = 30;

/// overdue classification of a single due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverdueStatus {
    pub is_overdue: bool,
    /// whole days since the due date, zero while not yet due
    pub days_past_due: u32,
    pub severity: Severity,
}

/// classify a due date against the grace period.
///
/// depends on the clock: the same inputs give different answers as time
/// moves on.
pub fn calculate_overdue_status(
    due_date: DateTime<Utc>,
    grace_period_days: u32,
    time_provider: &SafeTimeProvider,
) -> OverdueStatus {
    classify(
        due_date,
        grace_period_days,
        DEFAULT_CRITICAL_WINDOW_DAYS,
        time_provider.now(),
    )
}

fn classify(
    due_date: DateTime<Utc>,
    grace_period_days: u32,
    critical_window_days: u32,
    now: DateTime<Utc>,
) -> OverdueStatus {
    let days = whole_days_between(due_date, now).max(0);
    let days_past_due = u32::try_from(days).unwrap_or(u32::MAX);

    let grace = i64::from(grace_period_days);
    let critical = grace + i64::from(critical_window_days);

    let severity = if days > critical {
        Severity::Critical
    } else if days > grace {
        Severity::Warning
    } else {
        Severity::Normal
    };

    OverdueStatus {
        is_overdue: days > grace,
        days_past_due,
        severity,
    }
}

/// overdue classification with configured grace and critical windows
pub struct OverdueTracker {
    pub policy: OverduePolicy,
}

impl OverdueTracker {
    pub fn new(policy: OverduePolicy) -> Self {
        Self { policy }
    }

    pub fn status(&self, due_date: DateTime<Utc>, time_provider: &SafeTimeProvider) -> OverdueStatus {
        let status = classify(
            due_date,
            self.policy.grace_period_days,
            self.policy.critical_window_days,
            time_provider.now(),
        );
        if status.is_overdue {
            tracing::debug!(
                days_past_due = status.days_past_due,
                severity = ?status.severity,
                "payment overdue"
            );
        }
        status
    }
}
