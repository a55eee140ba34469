pub mod emi;
pub mod schedule;

pub use emi::{compute_loan, compute_loan_f64, AmortizationCalculator};
pub use schedule::{AmortizationSchedule, ScheduledPayment, YearlySummary};
