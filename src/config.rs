use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{FinanceError, Result};

/// default parameters for every calculation in the crate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceConfig {
    pub credit: CreditPolicy,
    pub overdue: OverduePolicy,
    pub late_fees: LateFeePolicy,
    pub payment_plan: PaymentPlanPolicy,
    /// ISO 4217 code used for display
    pub currency: String,
}

/// credit limit validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPolicy {
    /// share of the credit limit held back as a safety margin, in percent
    pub buffer_percentage: Decimal,
}

/// overdue classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverduePolicy {
    pub grace_period_days: u32,
    /// days past the grace period before an account turns critical
    pub critical_window_days: u32,
}

/// late fee accrual settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateFeePolicy {
    /// fee per day as a fraction of the outstanding amount
    pub daily_rate: Rate,
    /// cap on the total fee, in percent of the outstanding amount
    pub max_fee_percentage: Decimal,
}

/// payment plan and payment acceptance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlanPolicy {
    /// annual interest rate in percent
    pub annual_interest_rate: Decimal,
    pub allow_overpayment: bool,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            buffer_percentage: dec!(5),
        }
    }
}

impl Default for OverduePolicy {
    fn default() -> Self {
        Self {
            grace_period_days: 30,
            critical_window_days: 30,
        }
    }
}

impl Default for LateFeePolicy {
    fn default() -> Self {
        Self {
            daily_rate: Rate::from_decimal(dec!(0.001)),
            max_fee_percentage: dec!(10),
        }
    }
}

impl Default for PaymentPlanPolicy {
    fn default() -> Self {
        Self {
            annual_interest_rate: Decimal::ZERO,
            allow_overpayment: true,
        }
    }
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FinanceConfig {
    /// marketplace defaults: 5% buffer, 30 day grace, critical after 60 days
    pub fn standard() -> Self {
        Self {
            credit: CreditPolicy::default(),
            overdue: OverduePolicy::default(),
            late_fees: LateFeePolicy::default(),
            payment_plan: PaymentPlanPolicy::default(),
            currency: "DZD".to_string(),
        }
    }

    /// tighter terms for new or flagged retailers
    pub fn conservative() -> Self {
        Self {
            credit: CreditPolicy {
                buffer_percentage: dec!(10),
            },
            overdue: OverduePolicy {
                grace_period_days: 15,
                critical_window_days: 15,
            },
            late_fees: LateFeePolicy::default(),
            payment_plan: PaymentPlanPolicy {
                annual_interest_rate: Decimal::ZERO,
                allow_overpayment: false,
            },
            currency: "DZD".to_string(),
        }
    }

    /// check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let buffer = self.credit.buffer_percentage;
        if buffer < Decimal::ZERO || buffer > dec!(100) {
            return Err(invalid(format!(
                "credit buffer percentage must be between 0 and 100, got {}",
                buffer
            )));
        }

        if self.late_fees.daily_rate.as_decimal() < Decimal::ZERO {
            return Err(invalid(format!(
                "late fee daily rate cannot be negative, got {}",
                self.late_fees.daily_rate.as_decimal()
            )));
        }

        let cap = self.late_fees.max_fee_percentage;
        if cap < Decimal::ZERO || cap > dec!(100) {
            return Err(invalid(format!(
                "maximum late fee percentage must be between 0 and 100, got {}",
                cap
            )));
        }

        if self.payment_plan.annual_interest_rate < Decimal::ZERO {
            return Err(invalid(format!(
                "payment plan interest rate cannot be negative, got {}",
                self.payment_plan.annual_interest_rate
            )));
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(format!(
                "currency must be a three letter ISO 4217 code, got {:?}",
                self.currency
            )));
        }

        Ok(())
    }

    /// load and validate a configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FinanceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn invalid(message: String) -> FinanceError {
    tracing::warn!(%message, "rejected finance configuration");
    FinanceError::InvalidConfiguration { message }
}
