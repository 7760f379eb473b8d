/// payment plan and late fees for an overdue balance
use retailer_credit_rs::chrono::{Duration, TimeZone, Utc};
use retailer_credit_rs::{
    calculate_overdue_status, FinanceConfig, LateFeeEngine, Money, OverdueTracker, PaymentPlan,
    SafeTimeProvider, TimeSource,
};

fn main() {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap(),
    ));
    let control = time.test_control().unwrap();
    let config = FinanceConfig::standard();

    let due = time.now();
    let owed = Money::from_major(450_000);

    let tracker = OverdueTracker::new(config.overdue.clone());
    let fees = LateFeeEngine::new(config.late_fees.clone());

    for _ in 0..4 {
        control.advance(Duration::days(25));
        let status = tracker.status(due, &time);
        println!(
            "{}: {} days past due, {:?}, late fee {}",
            time.now().format("%Y-%m-%d"),
            status.days_past_due,
            status.severity,
            fees.fee(owed, status.days_past_due as i64).format(&config.currency),
        );
    }

    // the grace period passed to the free function is explicit
    let status = calculate_overdue_status(due, 60, &time);
    println!("with a 60 day grace period: overdue={}", status.is_overdue);

    let plan = PaymentPlan::generate(owed, 6, config.payment_plan.annual_interest_rate, time.now());
    for scheduled in &plan.installments {
        println!(
            "#{} due {} pay {} (remaining {})",
            scheduled.installment.installment,
            scheduled.due_date.format("%Y-%m-%d"),
            scheduled.installment.amount.format(&config.currency),
            scheduled.installment.remaining_balance.format(&config.currency),
        );
    }
}
