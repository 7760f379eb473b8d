pub mod limit;
pub mod utilization;

pub use limit::{validate_credit_limit, CreditValidation};
pub use utilization::{available_credit, credit_used, credit_utilization};
