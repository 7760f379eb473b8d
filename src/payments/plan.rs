use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// longest plan offered, thirty years of monthly installments
pub const MAX_INSTALLMENTS: u32 = 360;

/// one installment of a repayment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub installment: u32,
    /// principal plus interest
    pub amount: Money,
    pub principal: Money,
    pub interest: Money,
    pub remaining_balance: Money,
}

/// equal-principal repayment schedule with interest on the declining balance.
///
/// `annual_interest_rate` is in percent. Installment counts above
/// [`MAX_INSTALLMENTS`] are capped. Each principal is at least one
/// [`Money::SMALLEST_UNIT`], the plan stops early once the balance is
/// cleared, and the last installment takes whatever fixed-point remainder is
/// left so the final balance is exactly zero.
pub fn calculate_payment_plan(
    total_owed: Money,
    monthly_installments: u32,
    annual_interest_rate: Decimal,
) -> Vec<Installment> {
    if monthly_installments == 0 || !total_owed.is_positive() {
        return Vec::new();
    }

    let count = monthly_installments.min(MAX_INSTALLMENTS);
    if count < monthly_installments {
        tracing::debug!(requested = monthly_installments, count, "payment plan length capped");
    }

    let principal_per_installment =
        Money::from_decimal(total_owed.as_decimal() / Decimal::from(count)).max(Money::SMALLEST_UNIT);
    let monthly_rate = Rate::from_percentage_decimal(annual_interest_rate).monthly_rate();

    let mut installments = Vec::with_capacity(count as usize);
    let mut balance = total_owed;

    for i in 1..=count {
        let interest = balance * monthly_rate.as_decimal();
        let principal = if i == count {
            balance
        } else {
            principal_per_installment.min(balance)
        };

        balance = (balance - principal).max(Money::ZERO);

        installments.push(Installment {
            installment: i,
            amount: principal + interest,
            principal,
            interest,
            remaining_balance: balance,
        });

        if balance.is_zero() {
            break;
        }
    }

    installments
}

/// installment with its due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledInstallment {
    #[serde(flatten)]
    pub installment: Installment,
    pub due_date: DateTime<Utc>,
}

/// repayment plan with due dates and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub total_owed: Money,
    pub annual_interest_rate: Decimal,
    pub start_date: DateTime<Utc>,
    pub installments: Vec<ScheduledInstallment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl PaymentPlan {
    /// generate a plan whose installments fall due monthly after `start_date`
    pub fn generate(
        total_owed: Money,
        monthly_installments: u32,
        annual_interest_rate: Decimal,
        start_date: DateTime<Utc>,
    ) -> Self {
        let installments: Vec<ScheduledInstallment> =
            calculate_payment_plan(total_owed, monthly_installments, annual_interest_rate)
                .into_iter()
                .map(|installment| {
                    let due_date = add_months(start_date, installment.installment);
                    ScheduledInstallment { installment, due_date }
                })
                .collect();

        let total_interest: Money = installments.iter().map(|s| s.installment.interest).sum();
        let total_payment: Money = installments.iter().map(|s| s.installment.amount).sum();

        Self {
            total_owed,
            annual_interest_rate,
            start_date,
            installments,
            total_interest,
            total_payment,
        }
    }

    /// next installment due on or after `now`
    pub fn next_due(&self, now: DateTime<Utc>) -> Option<&ScheduledInstallment> {
        self.installments.iter().find(|s| s.due_date >= now)
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }
}

/// add calendar months, clamping to the end of shorter months
fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    date.checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
