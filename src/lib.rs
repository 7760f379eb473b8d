pub mod config;
pub mod credit;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod overdue;
pub mod payments;
pub mod report;
pub mod risk;
pub mod types;

// re-export key types
pub use config::{CreditPolicy, FinanceConfig, LateFeePolicy, OverduePolicy, PaymentPlanPolicy};
pub use credit::{
    available_credit, credit_used, credit_utilization, validate_credit_limit, CreditValidation,
};
pub use decimal::{Money, Rate};
pub use errors::{FinanceError, Result};
pub use format::format_currency;
pub use overdue::{
    calculate_aging_buckets, calculate_late_fees, calculate_overdue_status, AgingBucket,
    AgingBuckets, LateFeeEngine, OverdueStatus, OverdueTracker,
};
pub use payments::{
    analyze_cash_flow, calculate_payment_plan, validate_payment, validate_payment_amount,
    CashFlowAnalysis, Installment, PaymentPlan, PaymentValidation, ScheduledInstallment,
};
pub use report::{CreditView, ReportInputs, RetailerReport};
pub use risk::{assess_credit_risk, RiskAssessment};
pub use types::{
    CreditSnapshot, OrderReceivable, PaymentMethod, PaymentRecord, PaymentStatus, RetailerId,
    RiskLevel, RiskProfile, Severity,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
