pub mod scoring;

pub use scoring::{assess_credit_risk, RiskAssessment, MAX_RISK_SCORE};
