use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::overdue::whole_days_between;
use crate::types::OrderReceivable;

/// orders and amount outstanding in one aging band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingBucket {
    pub count: u32,
    pub amount: Money,
}

impl AgingBucket {
    fn add(&mut self, amount: Money) {
        self.count += 1;
        self.amount += amount;
    }
}

/// receivables grouped by days since delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgingBuckets {
    /// 0-30 days
    pub current: AgingBucket,
    /// 31-60 days
    pub thirty_days: AgingBucket,
    /// 61-90 days
    pub sixty_days: AgingBucket,
    /// 91+ days
    pub ninety_days: AgingBucket,
}

impl AgingBuckets {
    pub fn total_amount(&self) -> Money {
        self.buckets().iter().map(|b| b.amount).sum()
    }

    pub fn total_count(&self) -> u32 {
        self.buckets().iter().map(|b| b.count).sum()
    }

    /// amount older than 30 days
    pub fn past_current_amount(&self) -> Money {
        self.total_amount() - self.current.amount
    }

    fn buckets(&self) -> [AgingBucket; 4] {
        [self.current, self.thirty_days, self.sixty_days, self.ninety_days]
    }

    fn bucket_for(&mut self, days_since_delivery: i64) -> &mut AgingBucket {
        match days_since_delivery {
            d if d <= 30 => &mut self.current,
            d if d <= 60 => &mut self.thirty_days,
            d if d <= 90 => &mut self.sixty_days,
            _ => &mut self.ninety_days,
        }
    }
}

/// age the unpaid part of each order from its delivery date.
///
/// fully paid or overpaid orders are skipped. uses the clock, so results
/// shift as time moves on.
pub fn calculate_aging_buckets(
    orders: &[OrderReceivable],
    time_provider: &SafeTimeProvider,
) -> AgingBuckets {
    let now = time_provider.now();
    let mut buckets = AgingBuckets::default();

    for order in orders {
        let outstanding = order.outstanding();
        if !outstanding.is_positive() {
            continue;
        }

        let days = whole_days_between(order.delivery_date, now);
        buckets.bucket_for(days).add(outstanding);
    }

    buckets
}
