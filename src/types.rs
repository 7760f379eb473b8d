use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a retailer account
pub type RetailerId = Uuid;

/// how a payment was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Credit,
}

/// payment processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

/// overdue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// within the grace period
    Normal,
    /// past the grace period
    Warning,
    /// past the grace period plus the critical window
    Critical,
}

/// credit risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// retailer credit position at a point in time.
///
/// a negative `current_balance` is money the retailer owes; a positive one is
/// credit the retailer holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditSnapshot {
    pub retailer_id: Option<RetailerId>,
    pub credit_limit: Money,
    pub current_balance: Money,
}

impl CreditSnapshot {
    pub fn new(credit_limit: Money, current_balance: Money) -> Self {
        Self {
            retailer_id: None,
            credit_limit,
            current_balance,
        }
    }

    pub fn for_retailer(retailer_id: RetailerId, credit_limit: Money, current_balance: Money) -> Self {
        Self {
            retailer_id: Some(retailer_id),
            credit_limit,
            current_balance,
        }
    }
}

/// a payment received from a retailer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub amount: Money,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }
}

/// a delivered order with its collected amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceivable {
    pub order_id: Option<Uuid>,
    pub delivery_date: DateTime<Utc>,
    pub total_amount: Money,
    pub payments_received: Money,
}

impl OrderReceivable {
    pub fn new(delivery_date: DateTime<Utc>, total_amount: Money, payments_received: Money) -> Self {
        Self {
            order_id: None,
            delivery_date,
            total_amount,
            payments_received,
        }
    }

    /// amount still to be collected; negative when overpaid
    pub fn outstanding(&self) -> Money {
        self.total_amount - self.payments_received
    }
}

/// inputs to the credit risk score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub current_balance: Money,
    pub credit_limit: Money,
    pub payment_history_months: u32,
    pub late_payment_count: u32,
    pub total_payments: u32,
    pub business_age_months: u32,
}
