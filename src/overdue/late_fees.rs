use rust_decimal::Decimal;

use crate::config::LateFeePolicy;
use crate::decimal::{Money, Rate};

/// linear daily late fee capped at a share of the outstanding amount.
///
/// an accrual too large to represent is already past the cap, so the cap is
/// returned.
pub fn calculate_late_fees(
    outstanding_amount: Money,
    days_past_due: i64,
    daily_late_fee_rate: Rate,
    max_late_fee_percentage: Decimal,
) -> Money {
    if days_past_due <= 0 {
        return Money::ZERO;
    }

    let cap = outstanding_amount.percentage(max_late_fee_percentage);

    daily_late_fee_rate
        .as_decimal()
        .checked_mul(Decimal::from(days_past_due))
        .and_then(|factor| outstanding_amount.as_decimal().checked_mul(factor))
        .map_or(cap, |accrued| Money::from_decimal(accrued).min(cap))
}

/// late fee engine backed by a configured policy
pub struct LateFeeEngine {
    pub policy: LateFeePolicy,
}

impl LateFeeEngine {
    pub fn new(policy: LateFeePolicy) -> Self {
        Self { policy }
    }

    pub fn fee(&self, outstanding_amount: Money, days_past_due: i64) -> Money {
        calculate_late_fees(
            outstanding_amount,
            days_past_due,
            self.policy.daily_rate,
            self.policy.max_fee_percentage,
        )
    }

    /// outstanding amount plus the late fee
    pub fn amount_due(&self, outstanding_amount: Money, days_past_due: i64) -> Money {
        outstanding_amount + self.fee(outstanding_amount, days_past_due)
    }
}

impl Default for LateFeeEngine {
    fn default() -> Self {
        Self::new(LateFeePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_fee_when_not_late() {
        let rate = Rate::from_decimal(dec!(0.001));
        assert_eq!(calculate_late_fees(Money::from_major(1_000), 0, rate, dec!(10)), Money::ZERO);
        assert_eq!(calculate_late_fees(Money::from_major(1_000), -5, rate, dec!(10)), Money::ZERO);
    }

    #[test]
    fn test_linear_accrual() {
        let rate = Rate::from_decimal(dec!(0.001));
        // 1000 * 0.001 * 30
        let fee = calculate_late_fees(Money::from_major(1_000), 30, rate, dec!(10));
        assert_eq!(fee, Money::from_major(30));
    }

    #[test]
    fn test_fee_capped() {
        let rate = Rate::from_decimal(dec!(0.001));
        let fee = calculate_late_fees(Money::from_major(1_000), 1_000, rate, dec!(10));
        assert_eq!(fee, Money::from_major(100));

        // cap reached exactly at day 100
        let fee = calculate_late_fees(Money::from_major(1_000), 100, rate, dec!(10));
        assert_eq!(fee, Money::from_major(100));
    }

    #[test]
    fn test_huge_day_count_returns_cap() {
        let rate = Rate::from_decimal(dec!(0.001));
        let outstanding = Money::from_major(10_000_000_000_000);

        let fee = calculate_late_fees(outstanding, i64::MAX, rate, dec!(10));
        assert_eq!(fee, Money::from_major(1_000_000_000_000));

        let fee = calculate_late_fees(Money::from_major(1_000), i64::MAX, rate, dec!(10));
        assert_eq!(fee, Money::from_major(100));
    }

    #[test]
    fn test_engine_defaults() {
        let engine = LateFeeEngine::default();

        assert_eq!(engine.fee(Money::from_major(2_000), 10), Money::from_major(20));
        assert_eq!(engine.fee(Money::from_major(2_000), 0), Money::ZERO);
        assert_eq!(engine.amount_due(Money::from_major(2_000), 500), Money::from_major(2_200));
    }
}
