use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::credit::credit_utilization;
use crate::types::{RiskLevel, RiskProfile};

/// highest possible risk score
pub const MAX_RISK_SCORE: u32 = 100;

const HIGH_RISK_THRESHOLD: u32 = 60;
const MEDIUM_RISK_THRESHOLD: u32 = 30;

/// credit risk verdict for a retailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0 (safest) to 100
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: Vec<String>,
    pub recommendation: String,
}

/// additive risk score over utilization, late payments, business age,
/// balance status and payment history length
pub fn assess_credit_risk(profile: &RiskProfile) -> RiskAssessment {
    let mut score = 0;
    let mut factors = Vec::new();

    let utilization = credit_utilization(profile.credit_limit, profile.current_balance).as_percentage();
    score += utilization_points(utilization, &mut factors);

    if profile.total_payments > 0 {
        let late_rate = Decimal::from(profile.late_payment_count) / Decimal::from(profile.total_payments);
        score += late_payment_points(late_rate, &mut factors);
    }

    score += business_age_points(profile.business_age_months, &mut factors);

    if profile.current_balance < -profile.credit_limit {
        score += 20;
        factors.push("Balance exceeds credit limit".to_string());
    } else if profile.current_balance.is_negative() {
        score += 10;
        factors.push("Outstanding balance owed".to_string());
    }

    if profile.payment_history_months < 3 {
        score += 10;
        factors.push("Very limited payment history (less than 3 months)".to_string());
    } else if profile.payment_history_months < 6 {
        score += 5;
        factors.push("Limited payment history (less than 6 months)".to_string());
    }

    let risk_score = score.min(MAX_RISK_SCORE);
    let (risk_level, recommendation) = classify(risk_score);

    tracing::debug!(risk_score, risk_level = ?risk_level, factors = factors.len(), "credit risk assessed");

    RiskAssessment {
        risk_score,
        risk_level,
        factors,
        recommendation: recommendation.to_string(),
    }
}

fn utilization_points(utilization_percentage: Decimal, factors: &mut Vec<String>) -> u32 {
    if utilization_percentage > dec!(90) {
        factors.push("Very high credit utilization (over 90%)".to_string());
        30
    } else if utilization_percentage > dec!(70) {
        factors.push("High credit utilization (over 70%)".to_string());
        20
    } else if utilization_percentage > dec!(50) {
        factors.push("Moderate credit utilization (over 50%)".to_string());
        10
    } else {
        0
    }
}

fn late_payment_points(late_rate: Decimal, factors: &mut Vec<String>) -> u32 {
    if late_rate > dec!(0.20) {
        factors.push("High late payment rate (over 20%)".to_string());
        25
    } else if late_rate > dec!(0.10) {
        factors.push("Elevated late payment rate (over 10%)".to_string());
        15
    } else if late_rate > dec!(0.05) {
        factors.push("Some late payments (over 5%)".to_string());
        5
    } else {
        0
    }
}

fn business_age_points(months: u32, factors: &mut Vec<String>) -> u32 {
    if months < 6 {
        factors.push("New business (less than 6 months)".to_string());
        15
    } else if months < 12 {
        factors.push("Young business (less than 1 year)".to_string());
        10
    } else if months < 24 {
        factors.push("Business less than 2 years old".to_string());
        5
    } else {
        0
    }
}

fn classify(risk_score: u32) -> (RiskLevel, &'static str) {
    if risk_score >= HIGH_RISK_THRESHOLD {
        (
            RiskLevel::High,
            "Reduce credit limit or require cash-only payments",
        )
    } else if risk_score >= MEDIUM_RISK_THRESHOLD {
        (
            RiskLevel::Medium,
            "Monitor account closely and review credit terms periodically",
        )
    } else {
        (
            RiskLevel::Low,
            "Good candidate for credit limit extension",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    fn profile(limit: i64, balance: i64) -> RiskProfile {
        RiskProfile {
            current_balance: Money::from_major(balance),
            credit_limit: Money::from_major(limit),
            payment_history_months: 36,
            late_payment_count: 0,
            total_payments: 40,
            business_age_months: 60,
        }
    }

    #[test]
    fn test_established_retailer_is_low_risk() {
        let assessment = assess_credit_risk(&profile(100_000, 0));

        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.factors.is_empty());
        assert!(assessment.recommendation.contains("extension"));
    }

    #[test]
    fn test_worst_case_clamped_to_max() {
        let mut p = profile(1_000, -1_100);
        p.late_payment_count = 5;
        p.total_payments = 20;
        p.business_age_months = 3;
        p.payment_history_months = 2;

        // 30 + 25 + 15 + 20 + 10 = 100
        let assessment = assess_credit_risk(&p);
        assert_eq!(assessment.risk_score, MAX_RISK_SCORE);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(assessment.factors.len(), 5);
        assert!(assessment.recommendation.contains("cash-only"));
    }

    #[test]
    fn test_high_utilization_within_limit() {
        let mut p = profile(1_000, -950);
        p.late_payment_count = 5;
        p.total_payments = 20;
        p.business_age_months = 3;
        p.payment_history_months = 2;

        // 30 + 25 + 15 + 10 + 10
        let assessment = assess_credit_risk(&p);
        assert_eq!(assessment.risk_score, 90);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert!(assessment.factors.contains(&"Outstanding balance owed".to_string()));
    }

    #[test]
    fn test_utilization_tiers() {
        // 10 for the owed balance on top of each tier
        assert_eq!(assess_credit_risk(&profile(1_000, -910)).risk_score, 40);
        assert_eq!(assess_credit_risk(&profile(1_000, -900)).risk_score, 30);
        assert_eq!(assess_credit_risk(&profile(1_000, -700)).risk_score, 20);
        assert_eq!(assess_credit_risk(&profile(1_000, -510)).risk_score, 20);
        assert_eq!(assess_credit_risk(&profile(1_000, -500)).risk_score, 10);
    }

    #[test]
    fn test_late_payment_tiers() {
        let mut p = profile(100_000, 0);
        p.total_payments = 100;

        p.late_payment_count = 21;
        assert_eq!(assess_credit_risk(&p).risk_score, 25);
        p.late_payment_count = 20;
        assert_eq!(assess_credit_risk(&p).risk_score, 15);
        p.late_payment_count = 6;
        assert_eq!(assess_credit_risk(&p).risk_score, 5);
        p.late_payment_count = 5;
        assert_eq!(assess_credit_risk(&p).risk_score, 0);
    }

    #[test]
    fn test_late_rate_skipped_without_payments() {
        let mut p = profile(100_000, 0);
        p.total_payments = 0;
        p.late_payment_count = 3;

        assert_eq!(assess_credit_risk(&p).risk_score, 0);
    }

    #[test]
    fn test_business_age_and_history_tiers() {
        let mut p = profile(100_000, 0);

        p.business_age_months = 11;
        assert_eq!(assess_credit_risk(&p).risk_score, 10);
        p.business_age_months = 12;
        assert_eq!(assess_credit_risk(&p).risk_score, 5);
        p.business_age_months = 24;
        assert_eq!(assess_credit_risk(&p).risk_score, 0);

        p.payment_history_months = 5;
        assert_eq!(assess_credit_risk(&p).risk_score, 5);
        p.payment_history_months = 0;
        assert_eq!(assess_credit_risk(&p).risk_score, 10);
    }

    #[test]
    fn test_medium_threshold() {
        // 20 utilization + 10 owed balance
        let assessment = assess_credit_risk(&profile(1_000, -800));
        assert_eq!(assessment.risk_score, 30);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);

        let assessment = assess_credit_risk(&profile(1_000, -600));
        assert_eq!(assessment.risk_score, 20);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_limit_with_debt() {
        // no utilization points without a limit, but the debt is over the limit
        let assessment = assess_credit_risk(&profile(0, -100));
        assert_eq!(assessment.risk_score, 20);
    }
}
