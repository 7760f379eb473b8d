/// build a full retailer report with a controllable clock
use retailer_credit_rs::chrono::{Duration, TimeZone, Utc};
use retailer_credit_rs::{
    CreditSnapshot, FinanceConfig, Money, OrderReceivable, PaymentMethod, PaymentRecord,
    PaymentStatus, ReportInputs, RetailerReport, RiskProfile, SafeTimeProvider, TimeSource, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
    ));
    let now = time.now();

    let snapshot = CreditSnapshot::for_retailer(
        Uuid::new_v4(),
        Money::from_major(800_000),
        Money::from_major(-620_000),
    );

    let orders = vec![
        OrderReceivable::new(now - Duration::days(8), Money::from_major(180_000), Money::ZERO),
        OrderReceivable::new(now - Duration::days(44), Money::from_major(240_000), Money::from_major(40_000)),
        OrderReceivable::new(now - Duration::days(97), Money::from_major(260_000), Money::from_major(20_000)),
    ];

    let payments = vec![
        PaymentRecord {
            amount: Money::from_major(40_000),
            payment_method: PaymentMethod::Cash,
            created_at: now - Duration::days(5),
            status: PaymentStatus::Completed,
        },
        PaymentRecord {
            amount: Money::from_major(20_000),
            payment_method: PaymentMethod::Credit,
            created_at: now - Duration::days(12),
            status: PaymentStatus::Failed,
        },
    ];

    let profile = RiskProfile {
        current_balance: snapshot.current_balance,
        credit_limit: snapshot.credit_limit,
        payment_history_months: 9,
        late_payment_count: 3,
        total_payments: 14,
        business_age_months: 10,
    };

    let report = RetailerReport::build(
        ReportInputs {
            snapshot: &snapshot,
            orders: &orders,
            payments: &payments,
            profile: &profile,
            period_days: 30,
        },
        &FinanceConfig::standard(),
        &time,
    );

    println!("{}", report.to_json()?);
    Ok(())
}
