/// quick start - check a purchase against a retailer's credit line
use retailer_credit_rs::{format_currency, validate_credit_limit, Decimal, Money};

fn main() {
    // retailer with a 1,000,000 DZD line who already owes 900,000
    let limit = Money::from_major(1_000_000);
    let balance = Money::from_major(-900_000);

    for purchase in [30_000, 60_000, 120_000] {
        let result = validate_credit_limit(Money::from_major(purchase), limit, balance, Decimal::from(5));
        println!(
            "purchase {}: valid={} available={} utilization={}",
            format_currency(Money::from_major(purchase), "DZD"),
            result.is_valid,
            format_currency(result.available_credit, "DZD"),
            result.utilization,
        );
        if let Some(message) = result.message {
            println!("  rejected: {}", message);
        }
    }
}
