use rust_decimal::Decimal;
use tracing::debug;

use crate::config::CurrencyConfig;
use crate::decimal::{round_half_up, Money, Rate};
use crate::types::{LoanParameters, LoanResult};

/// fixed-rate EMI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmortizationCalculator {
    decimal_places: u32,
}

impl Default for AmortizationCalculator {
    /// whole-rupee rounding
    fn default() -> Self {
        Self { decimal_places: 0 }
    }
}

impl AmortizationCalculator {
    pub fn new(currency: &CurrencyConfig) -> Self {
        Self {
            decimal_places: currency.decimal_places,
        }
    }

    pub fn with_decimal_places(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// monthly payment and aggregate cost of a loan
    ///
    /// Never fails: a non-positive property value, a zero tenure or amounts
    /// beyond the decimal range produce a zeroed result. Down payment
    /// percentages are used as given; clamp them with
    /// [`crate::config::LoanInputLimits::clamp`] first if they come straight
    /// from a form.
    pub fn compute(&self, params: &LoanParameters) -> LoanResult {
        if !params.is_computable() {
            debug!(
                property_value = %params.property_value,
                tenure_years = params.tenure_years,
                "loan inputs incomplete, returning zeroed result"
            );
            return LoanResult::zeroed();
        }

        match self.try_compute(params) {
            Some(result) => result,
            None => {
                debug!(
                    property_value = %params.property_value,
                    tenure_years = params.tenure_years,
                    "loan amounts exceed decimal range, returning zeroed result"
                );
                LoanResult::zeroed()
            }
        }
    }

    fn try_compute(&self, params: &LoanParameters) -> Option<LoanResult> {
        let dp = self.decimal_places;
        let down_payment = params.down_payment()?;
        let principal = params.principal()?;
        let months = params.number_of_months()?;
        let emi = emi_amount(principal, params.annual_rate(), months)?;

        // totals come from the unrounded installment
        let total_payable = round_half_up(emi.checked_mul(Decimal::from(months))?, dp);
        let principal_rounded = round_half_up(principal.as_decimal(), dp);

        Some(LoanResult {
            monthly_payment: Money::from_decimal(round_half_up(emi, dp)),
            total_payable: Money::from_decimal(total_payable),
            total_interest: Money::from_decimal(total_payable.checked_sub(principal_rounded)?),
            principal: Money::from_decimal(principal_rounded),
            down_payment: down_payment.round_dp(dp),
            number_of_months: months,
        })
    }
}

/// compute a loan with whole-rupee rounding
pub fn compute_loan(
    property_value: Money,
    down_payment_percent: Decimal,
    annual_interest_rate_percent: Decimal,
    tenure_years: u32,
) -> LoanResult {
    let params = LoanParameters::new(
        property_value,
        down_payment_percent,
        annual_interest_rate_percent,
        tenure_years,
    );
    AmortizationCalculator::default().compute(&params)
}

/// compute a loan from raw float form values
pub fn compute_loan_f64(
    property_value: f64,
    down_payment_percent: f64,
    annual_interest_rate_percent: f64,
    tenure_years: u32,
) -> LoanResult {
    let params = LoanParameters::from_f64(
        property_value,
        down_payment_percent,
        annual_interest_rate_percent,
        tenure_years,
    );
    AmortizationCalculator::default().compute(&params)
}

/// unrounded installment for a principal over `months` monthly periods;
/// `None` when the installment falls outside the decimal range
pub(crate) fn emi_amount(principal: Money, annual_rate: Rate, months: u32) -> Option<Decimal> {
    let p = principal.as_decimal();
    if months == 0 {
        return Some(p);
    }

    let n = Decimal::from(months);
    let r = annual_rate.monthly_rate().as_decimal();
    if r.is_zero() {
        return p.checked_div(n);
    }

    // EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
    let interest = p.checked_mul(r)?;
    let compound = match compound_factor(Decimal::ONE.checked_add(r)?, months) {
        Some(c) => c,
        // (1 + r)^n beyond decimal range: the installment converges to P * r
        None => return Some(interest),
    };

    let denominator = compound.checked_sub(Decimal::ONE)?;
    if denominator.is_zero() {
        return p.checked_div(n);
    }

    // divide first, compound alone may sit near the top of the decimal range
    interest.checked_mul(compound.checked_div(denominator)?)
}

/// base^exp by squaring; `None` on overflow
fn compound_factor(base: Decimal, exp: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square)?;
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_regression_fixture() {
        // 50 lakh property, 20% down, 8.5% for 20 years
        let result = compute_loan(Money::from_major(5_000_000), dec!(20), dec!(8.5), 20);

        assert_eq!(result.principal, Money::from_major(4_000_000));
        assert_eq!(result.down_payment, Money::from_major(1_000_000));
        assert_eq!(result.number_of_months, 240);
        assert_eq!(result.monthly_payment, Money::from_major(34_713));
        assert_eq!(result.total_payable, Money::from_major(8_331_103));
        assert_eq!(result.total_interest, Money::from_major(4_331_103));
    }

    #[test]
    fn test_other_known_loans() {
        let one_year = compute_loan(Money::from_major(1_000_000), Decimal::ZERO, dec!(12), 1);
        assert_eq!(one_year.monthly_payment, Money::from_major(88_849));
        assert_eq!(one_year.total_interest, Money::from_major(66_185));

        let car = compute_loan(Money::from_major(100_000), Decimal::ZERO, dec!(10), 5);
        assert_eq!(car.monthly_payment, Money::from_major(2_125));
        assert_eq!(car.total_payable, Money::from_major(127_482));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = compute_loan(Money::from_major(3_000_000), dec!(20), Decimal::ZERO, 10);

        // 24 lakh over 120 months
        assert_eq!(result.monthly_payment, Money::from_major(20_000));
        assert_eq!(result.total_payable, Money::from_major(2_400_000));
        assert_eq!(result.total_interest, Money::ZERO);
    }

    #[test]
    fn test_conservation() {
        let cases = [
            (5_000_000, dec!(20), dec!(8.5), 20),
            (1_234_567, dec!(15), dec!(9.15), 25),
            (750_000, dec!(0), dec!(11.75), 7),
            (99_999_999, dec!(33.3), dec!(6.95), 30),
        ];

        for (value, down, rate, years) in cases {
            let params = LoanParameters::new(Money::from_major(value), down, rate, years);
            let result = AmortizationCalculator::default().compute(&params);
            let months = Decimal::from(years * 12);

            assert_eq!(result.total_payable, result.principal + result.total_interest);

            // total payable tracks the exact installment within one rupee
            let exact = emi_amount(params.principal().unwrap(), params.annual_rate(), years * 12).unwrap();
            let error = (result.total_payable.as_decimal() - exact * months).abs();
            assert!(error <= Decimal::ONE, "total payable off by {}", error);

            // whole-rupee rounding of the installment, compounded over the term
            let drift = (result.monthly_payment.as_decimal() * months - result.total_payable.as_decimal()).abs();
            assert!(drift <= months / dec!(2) + Decimal::ONE, "drift {} too large", drift);
            assert!(result.total_interest.is_positive());
        }
    }

    #[test]
    fn test_rate_monotonicity() {
        let value = Money::from_major(5_000_000);
        let mut previous = compute_loan(value, dec!(20), Decimal::ZERO, 20);

        for step in 1..=20 {
            let rate = Decimal::from(step) / dec!(2);
            let current = compute_loan(value, dec!(20), rate, 20);
            assert!(current.monthly_payment > previous.monthly_payment);
            assert!(current.total_interest > previous.total_interest);
            previous = current;
        }
    }

    #[test]
    fn test_full_down_payment() {
        let result = compute_loan(Money::from_major(5_000_000), dec!(100), dec!(8.5), 20);

        assert_eq!(result.principal, Money::ZERO);
        assert_eq!(result.monthly_payment, Money::ZERO);
        assert_eq!(result.total_interest, Money::ZERO);
        assert_eq!(result.down_payment, Money::from_major(5_000_000));
    }

    #[test]
    fn test_invalid_inputs_are_zeroed() {
        assert!(compute_loan(Money::from_major(-100), dec!(20), dec!(8.5), 20).is_zeroed());
        assert!(compute_loan(Money::ZERO, dec!(20), dec!(8.5), 20).is_zeroed());
        assert!(compute_loan(Money::from_major(5_000_000), dec!(20), dec!(8.5), 0).is_zeroed());
        assert!(compute_loan_f64(f64::NAN, 20.0, 8.5, 20).is_zeroed());
        assert!(compute_loan_f64(-100.0, 20.0, 8.5, 20).is_zeroed());
    }

    #[test]
    fn test_f64_entry_point_matches_decimal() {
        let from_floats = compute_loan_f64(5_000_000.0, 20.0, 8.5, 20);
        assert_eq!(from_floats.monthly_payment, Money::from_major(34_713));
    }

    #[test]
    fn test_cent_rounding() {
        let calculator = AmortizationCalculator::new(&CalculatorConfig::usd().currency);
        let params = LoanParameters::new(Money::from_major(5_000_000), dec!(20), dec!(8.5), 20);
        let result = calculator.compute(&params);

        assert_eq!(calculator.decimal_places(), 2);
        assert_eq!(result.monthly_payment, Money::from_decimal(dec!(34712.93)));
        assert_eq!(result.total_payable, Money::from_decimal(dec!(8331103.04)));
        assert_eq!(result.total_interest, Money::from_decimal(dec!(4331103.04)));
    }

    #[test]
    fn test_extreme_tenure_does_not_overflow() {
        let result = compute_loan(Money::from_major(1_000_000), Decimal::ZERO, dec!(30), 10_000);
        // converges to interest-only: 1,000,000 * 0.025
        assert_eq!(result.monthly_payment, Money::from_major(25_000));
    }

    #[test]
    fn test_out_of_range_amounts_are_zeroed() {
        // 20% of 1e28 overflows the decimal range
        assert!(compute_loan_f64(1e28, 20.0, 8.5, 20).is_zeroed());
        assert!(compute_loan(Money::from_decimal(Decimal::MAX), Decimal::ZERO, dec!(8.5), 20).is_zeroed());

        // tenure in months beyond u32
        let result = compute_loan(Money::from_major(1_000_000), Decimal::ZERO, dec!(8.5), 400_000_000);
        assert!(result.is_zeroed());
        assert_eq!(result.number_of_months, 0);
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(dec!(2), 10), Some(dec!(1024)));
        assert_eq!(compound_factor(dec!(1.5), 0), Some(Decimal::ONE));
        assert_eq!(compound_factor(dec!(10), 40), None);
    }
}
