use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{PaymentMethod, PaymentRecord};

/// collections summary over a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowAnalysis {
    pub total_inflow: Money,
    /// outflows are not tracked yet and stay at zero
    pub total_outflow: Money,
    pub net_flow: Money,
    pub cash_receipts: Money,
    pub credit_payments: Money,
    pub average_daily_collection: Money,
    pub payment_count: usize,
}

/// summarise completed payments over `period_days`
pub fn analyze_cash_flow(payments: &[PaymentRecord], period_days: i64) -> CashFlowAnalysis {
    let mut total_inflow = Money::ZERO;
    let mut cash_receipts = Money::ZERO;
    let mut credit_payments = Money::ZERO;
    let mut payment_count = 0;

    for payment in payments.iter().filter(|p| p.is_completed()) {
        total_inflow += payment.amount;
        match payment.payment_method {
            PaymentMethod::Cash => cash_receipts += payment.amount,
            PaymentMethod::Credit => credit_payments += payment.amount,
        }
        payment_count += 1;
    }

    let total_outflow = Money::ZERO;

    let average_daily_collection = if period_days > 0 {
        total_inflow / Decimal::from(period_days)
    } else {
        Money::ZERO
    };

    CashFlowAnalysis {
        total_inflow,
        total_outflow,
        net_flow: total_inflow - total_outflow,
        cash_receipts,
        credit_payments,
        average_daily_collection,
        payment_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;
    use chrono::{TimeZone, Utc};

    fn payment(amount: i64, method: PaymentMethod, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord {
            amount: Money::from_major(amount),
            payment_method: method,
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn test_only_completed_payments_count() {
        let payments = vec![
            payment(1_000, PaymentMethod::Cash, PaymentStatus::Completed),
            payment(2_000, PaymentMethod::Credit, PaymentStatus::Completed),
            payment(500, PaymentMethod::Cash, PaymentStatus::Pending),
            payment(700, PaymentMethod::Credit, PaymentStatus::Failed),
        ];

        let analysis = analyze_cash_flow(&payments, 30);

        assert_eq!(analysis.total_inflow, Money::from_major(3_000));
        assert_eq!(analysis.cash_receipts, Money::from_major(1_000));
        assert_eq!(analysis.credit_payments, Money::from_major(2_000));
        assert_eq!(analysis.total_outflow, Money::ZERO);
        assert_eq!(analysis.net_flow, analysis.total_inflow);
        assert_eq!(analysis.average_daily_collection, Money::from_major(100));
        assert_eq!(analysis.payment_count, 2);
    }

    #[test]
    fn test_zero_period_guard() {
        let payments = vec![payment(900, PaymentMethod::Cash, PaymentStatus::Completed)];

        let analysis = analyze_cash_flow(&payments, 0);
        assert_eq!(analysis.total_inflow, Money::from_major(900));
        assert_eq!(analysis.average_daily_collection, Money::ZERO);

        let analysis = analyze_cash_flow(&payments, -7);
        assert_eq!(analysis.average_daily_collection, Money::ZERO);
    }

    #[test]
    fn test_empty_payments() {
        let analysis = analyze_cash_flow(&[], 30);

        assert_eq!(analysis.total_inflow, Money::ZERO);
        assert_eq!(analysis.net_flow, Money::ZERO);
        assert_eq!(analysis.payment_count, 0);
    }
}
