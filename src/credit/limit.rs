use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FinanceConfig;
use crate::credit::utilization::{available_credit, credit_used, credit_utilization};
use crate::decimal::{Money, Rate};
use crate::types::CreditSnapshot;

/// outcome of checking a purchase against a retailer's credit line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditValidation {
    pub is_valid: bool,
    pub available_credit: Money,
    pub credit_used: Money,
    /// utilization before the purchase
    pub utilization: Rate,
    pub exceeds_limit: bool,
    /// credit limit after the safety buffer is held back
    pub effective_limit: Money,
    /// set only when the purchase is rejected
    pub message: Option<String>,
}

/// check whether a purchase fits within the available credit and the
/// buffered credit limit
pub fn validate_credit_limit(
    purchase_amount: Money,
    credit_limit: Money,
    current_balance: Money,
    buffer_percentage: Decimal,
) -> CreditValidation {
    let available = available_credit(credit_limit, current_balance);
    let used = credit_used(credit_limit, current_balance);
    let utilization = credit_utilization(credit_limit, current_balance);

    let effective_limit = credit_limit - credit_limit.percentage(buffer_percentage);

    let exceeds_available = purchase_amount > available;
    let exceeds_buffer = used + purchase_amount > effective_limit;

    let message = if exceeds_available {
        Some(format!(
            "Purchase amount {} exceeds available credit {}",
            purchase_amount, available
        ))
    } else if exceeds_buffer {
        Some(format!(
            "Purchase would push credit used to {} beyond the {}% safety buffer (effective limit {})",
            used + purchase_amount,
            buffer_percentage.normalize(),
            effective_limit
        ))
    } else {
        None
    };

    let is_valid = message.is_none();
    if !is_valid {
        tracing::debug!(
            purchase = %purchase_amount,
            available = %available,
            effective_limit = %effective_limit,
            exceeds_available,
            exceeds_buffer,
            "credit limit check failed"
        );
    }

    CreditValidation {
        is_valid,
        available_credit: available,
        credit_used: used,
        utilization,
        exceeds_limit: !is_valid,
        effective_limit,
        message,
    }
}

impl CreditSnapshot {
    /// validate a purchase with an explicit buffer
    pub fn validate_purchase_with_buffer(
        &self,
        purchase_amount: Money,
        buffer_percentage: Decimal,
    ) -> CreditValidation {
        validate_credit_limit(
            purchase_amount,
            self.credit_limit,
            self.current_balance,
            buffer_percentage,
        )
    }

    /// validate a purchase using the configured buffer
    pub fn validate_purchase(&self, purchase_amount: Money, config: &FinanceConfig) -> CreditValidation {
        self.validate_purchase_with_buffer(purchase_amount, config.credit.buffer_percentage)
    }
}
