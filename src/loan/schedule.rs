use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{round_half_up, Money};
use crate::loan::emi::AmortizationCalculator;
use crate::types::{LoanParameters, LoanResult};

/// longest schedule expanded month by month (100 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// one installment of the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
    pub cumulative_interest: Money,
    pub cumulative_principal: Money,
}

/// totals for one loan year (12 installments, counted from the first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub ending_balance: Money,
}

/// month-by-month breakdown of an EMI loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub summary: LoanResult,
    pub start_date: NaiveDate,
    pub payments: Vec<ScheduledPayment>,
    pub yearly: Vec<YearlySummary>,
}

impl AmortizationSchedule {
    /// generate the schedule; the first installment falls one month after `start_date`
    pub fn generate(
        params: &LoanParameters,
        start_date: NaiveDate,
        calculator: &AmortizationCalculator,
    ) -> Self {
        let summary = calculator.compute(params);
        if summary.is_zeroed() || summary.principal.is_zero() {
            debug!("nothing to amortize, returning empty schedule");
            return Self {
                summary,
                start_date,
                payments: Vec::new(),
                yearly: Vec::new(),
            };
        }
        if summary.number_of_months > MAX_SCHEDULE_MONTHS {
            debug!(
                months = summary.number_of_months,
                max = MAX_SCHEDULE_MONTHS,
                "tenure too long to expand, returning empty schedule"
            );
            return Self {
                summary,
                start_date,
                payments: Vec::new(),
                yearly: Vec::new(),
            };
        }

        let dp = calculator.decimal_places();
        let principal = summary.principal;
        let months = summary.number_of_months;
        let monthly_rate = params.annual_rate().monthly_rate().as_decimal();
        let emi = summary.monthly_payment;

        let mut payments = Vec::with_capacity(months as usize);
        let mut balance = principal;
        let mut cumulative_interest = Money::ZERO;
        let mut cumulative_principal = Money::ZERO;

        for i in 1..=months {
            let is_last = i == months;
            let interest_portion = Money::from_decimal(round_half_up(balance.as_decimal() * monthly_rate, dp));

            // the final installment settles whatever rounding left behind
            let principal_portion = if is_last {
                balance
            } else {
                (emi - interest_portion).min(balance)
            };
            let payment_amount = principal_portion + interest_portion;
            let ending_balance = balance - principal_portion;

            cumulative_interest += interest_portion;
            cumulative_principal += principal_portion;

            payments.push(ScheduledPayment {
                payment_number: i,
                payment_date: add_months(start_date, i),
                beginning_balance: balance,
                payment_amount,
                principal_portion,
                interest_portion,
                ending_balance,
                cumulative_interest,
                cumulative_principal,
            });

            balance = ending_balance;
        }

        let yearly = summarize_years(&payments);

        Self {
            summary,
            start_date,
            payments,
            yearly,
        }
    }

    /// get payment for specific period (1-based)
    pub fn get_payment(&self, payment_number: u32) -> Option<&ScheduledPayment> {
        payment_number
            .checked_sub(1)
            .and_then(|idx| self.payments.get(idx as usize))
    }

    /// outstanding balance after the given installment
    pub fn balance_after_payment(&self, payment_number: u32) -> Money {
        self.get_payment(payment_number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.summary.principal)
    }

    pub fn total_interest(&self) -> Money {
        self.payments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    pub fn total_payment(&self) -> Money {
        self.payments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// serialize to json for api responses
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

fn summarize_years(payments: &[ScheduledPayment]) -> Vec<YearlySummary> {
    payments
        .chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearlySummary {
            year: idx as u32 + 1,
            principal_paid: chunk.iter().fold(Money::ZERO, |acc, p| acc + p.principal_portion),
            interest_paid: chunk.iter().fold(Money::ZERO, |acc, p| acc + p.interest_portion),
            ending_balance: chunk.last().map(|p| p.ending_balance).unwrap_or(Money::ZERO),
        })
        .collect()
}

/// same day-of-month `months` later, clamped to the month end
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}
