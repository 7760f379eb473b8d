use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::CreditSnapshot;

/// credit the retailer can still draw, never negative
pub fn available_credit(credit_limit: Money, current_balance: Money) -> Money {
    (credit_limit + current_balance).max(Money::ZERO)
}

/// credit currently drawn. only a negative balance counts as used; the
/// limit plays no part in the amount
pub fn credit_used(_credit_limit: Money, current_balance: Money) -> Money {
    (-current_balance).max(Money::ZERO)
}

/// share of the credit limit in use; zero when there is no limit
pub fn credit_utilization(credit_limit: Money, current_balance: Money) -> Rate {
    if credit_limit.as_decimal() <= Decimal::ZERO {
        return Rate::ZERO;
    }

    let used = credit_used(credit_limit, current_balance);
    Rate::from_decimal(used.as_decimal() / credit_limit.as_decimal())
}

impl CreditSnapshot {
    pub fn available_credit(&self) -> Money {
        available_credit(self.credit_limit, self.current_balance)
    }

    pub fn credit_used(&self) -> Money {
        credit_used(self.credit_limit, self.current_balance)
    }

    pub fn utilization(&self) -> Rate {
        credit_utilization(self.credit_limit, self.current_balance)
    }

    /// balance owed beyond the credit limit
    pub fn is_over_limit(&self) -> bool {
        self.current_balance < -self.credit_limit
    }
}
