use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// decimal places kept on every monetary amount
const MONEY_SCALE: u32 = 8;

/// monetary amount, fixed point at 8 decimal places.
///
/// every arithmetic result is rounded back to the scale, so sums of
/// installments and aging buckets never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    /// smallest representable amount (1e-8)
    pub const SMALLEST_UNIT: Money = Money(Decimal::from_parts(1, 0, 0, false, MONEY_SCALE));

    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// whole dinars
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// parse a decimal string such as "1500.75"
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str(s).map(Money::from_decimal)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// `percent`% of the amount, saturating instead of overflowing
    pub fn percentage(&self, percent: Decimal) -> Self {
        Money::from_decimal(self.0.saturating_mul(percent) / Decimal::ONE_HUNDRED)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

/// arithmetic that re-rounds to the money scale
macro_rules! rounded_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl $op for Money {
            type Output = Money;

            fn $method(self, rhs: Money) -> Money {
                Money::from_decimal($op::$method(self.0, rhs.0))
            }
        }

        impl $assign_op for Money {
            fn $assign_method(&mut self, rhs: Money) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

rounded_op!(Add, add, AddAssign, add_assign);
rounded_op!(Sub, sub, SubAssign, sub_assign);

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, factor: Decimal) -> Money {
        Money::from_decimal(self.0 * factor)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, divisor: Decimal) -> Money {
        Money::from_decimal(self.0 / divisor)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// ratio such as a utilization or interest rate, stored as a fraction
/// (`0.05` is 5%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// from a percentage such as 7.5
    pub fn from_percentage_decimal(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    /// annual rate spread over twelve months
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(12))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_to_money_scale() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679");

        let third = Money::from_major(1) / dec!(3);
        assert_eq!(third.to_string(), "0.33333333");
    }

    #[test]
    fn test_sign_helpers() {
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::ZERO.is_positive());
        assert_eq!(-Money::from_major(950), Money::from_major(-950));
    }

    #[test]
    fn test_assign_ops() {
        let mut balance = Money::from_major(1_000);
        balance -= Money::from_major(250);
        balance += Money::SMALLEST_UNIT;
        assert_eq!(balance.to_string(), "750.00000001");
    }

    #[test]
    fn test_percentage() {
        let amount = Money::from_major(1_000);
        assert_eq!(amount.percentage(dec!(10)), Money::from_major(100));
        assert_eq!(amount.percentage(dec!(2.5)), Money::from_major(25));
    }

    #[test]
    fn test_percentage_saturates() {
        let huge = Money::from_decimal(Decimal::MAX);
        assert!(huge.percentage(dec!(500)).is_positive());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 650].iter().map(|&m| Money::from_major(m)).sum();
        assert_eq!(total, Money::from_major(1_000));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percentage_decimal(dec!(12));
        assert_eq!(rate.as_decimal(), dec!(0.12));
        assert_eq!(rate.monthly_rate().as_decimal(), dec!(0.01));
        assert_eq!(Rate::from_percentage_decimal(dec!(7.5)).as_decimal(), dec!(0.075));
        assert_eq!(Rate::from_decimal(dec!(0.95)).to_string(), "95%");
    }
}
