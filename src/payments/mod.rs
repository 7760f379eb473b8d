pub mod cash_flow;
pub mod plan;

use serde::{Deserialize, Serialize};

use crate::config::FinanceConfig;
use crate::decimal::Money;

pub use cash_flow::{analyze_cash_flow, CashFlowAnalysis};
pub use plan::{calculate_payment_plan, Installment, PaymentPlan, ScheduledInstallment};

/// outcome of checking a payment amount against the balance owed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentValidation {
    pub is_valid: bool,
    pub message: Option<String>,
    /// amount the caller should collect instead, when one applies
    pub suggested_amount: Option<Money>,
}

impl PaymentValidation {
    fn accepted() -> Self {
        Self {
            is_valid: true,
            message: None,
            suggested_amount: None,
        }
    }
}

/// validate a payment amount
pub fn validate_payment_amount(
    payment_amount: Money,
    outstanding_balance: Money,
    allow_overpayment: bool,
) -> PaymentValidation {
    if !payment_amount.is_positive() {
        tracing::debug!(amount = %payment_amount, "rejected non-positive payment");
        return PaymentValidation {
            is_valid: false,
            message: Some("Payment amount must be greater than zero".to_string()),
            suggested_amount: None,
        };
    }

    if !allow_overpayment && payment_amount > outstanding_balance {
        tracing::debug!(
            amount = %payment_amount,
            outstanding = %outstanding_balance,
            "rejected overpayment"
        );
        return PaymentValidation {
            is_valid: false,
            message: Some(format!(
                "Payment amount {} exceeds outstanding balance {}",
                payment_amount, outstanding_balance
            )),
            suggested_amount: Some(outstanding_balance),
        };
    }

    PaymentValidation::accepted()
}

/// validate a payment using the configured overpayment rule
pub fn validate_payment(
    payment_amount: Money,
    outstanding_balance: Money,
    config: &FinanceConfig,
) -> PaymentValidation {
    validate_payment_amount(
        payment_amount,
        outstanding_balance,
        config.payment_plan.allow_overpayment,
    )
}
