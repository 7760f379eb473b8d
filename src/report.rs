//! serializable retailer financial report for the api layer
use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::config::FinanceConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::overdue::{calculate_aging_buckets, AgingBuckets};
use crate::payments::{analyze_cash_flow, CashFlowAnalysis};
use crate::risk::{assess_credit_risk, RiskAssessment};
use crate::types::{CreditSnapshot, OrderReceivable, PaymentRecord, RetailerId, RiskProfile};

/// one retailer's credit, receivables, collections and risk in one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerReport {
    pub retailer_id: Option<RetailerId>,
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub credit: CreditView,
    pub aging: AgingBuckets,
    pub cash_flow: CashFlowAnalysis,
    pub risk: RiskAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditView {
    pub credit_limit: Money,
    pub current_balance: Money,
    pub available_credit: Money,
    pub credit_used: Money,
    pub utilization: Rate,
    pub over_limit: bool,
    /// formatted for display
    pub available_credit_display: String,
}

/// everything needed to build a report
pub struct ReportInputs<'a> {
    pub snapshot: &'a CreditSnapshot,
    pub orders: &'a [OrderReceivable],
    pub payments: &'a [PaymentRecord],
    pub profile: &'a RiskProfile,
    pub period_days: i64,
}

impl RetailerReport {
    pub fn build(
        inputs: ReportInputs<'_>,
        config: &FinanceConfig,
        time_provider: &SafeTimeProvider,
    ) -> Self {
        let snapshot = inputs.snapshot;
        let available = snapshot.available_credit();

        RetailerReport {
            retailer_id: snapshot.retailer_id,
            generated_at: time_provider.now(),
            currency: config.currency.clone(),
            credit: CreditView {
                credit_limit: snapshot.credit_limit,
                current_balance: snapshot.current_balance,
                available_credit: available,
                credit_used: snapshot.credit_used(),
                utilization: snapshot.utilization(),
                over_limit: snapshot.is_over_limit(),
                available_credit_display: available.format(&config.currency),
            },
            aging: calculate_aging_buckets(inputs.orders, time_provider),
            cash_flow: analyze_cash_flow(inputs.payments, inputs.period_days),
            risk: assess_credit_risk(inputs.profile),
        }
    }

    /// pretty json
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
