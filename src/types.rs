use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::area::AreaUnit;
use crate::decimal::{Money, Rate};

/// inputs of the EMI calculator, as collected from the loan form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub property_value: Money,
    /// share of the property value paid upfront, 0..=100
    pub down_payment_percent: Decimal,
    /// nominal annual rate, e.g. 8.5
    pub annual_interest_rate_percent: Decimal,
    pub tenure_years: u32,
}

impl LoanParameters {
    pub fn new(
        property_value: Money,
        down_payment_percent: Decimal,
        annual_interest_rate_percent: Decimal,
        tenure_years: u32,
    ) -> Self {
        Self {
            property_value,
            down_payment_percent,
            annual_interest_rate_percent,
            tenure_years,
        }
    }

    /// build from raw float form values; non-finite fields become zero so the
    /// calculation degrades to a zeroed result
    pub fn from_f64(
        property_value: f64,
        down_payment_percent: f64,
        annual_interest_rate_percent: f64,
        tenure_years: u32,
    ) -> Self {
        let percent = |v: f64| Money::from_f64(v).map(|m| m.as_decimal()).unwrap_or_default();
        Self {
            property_value: Money::from_f64(property_value).unwrap_or(Money::ZERO),
            down_payment_percent: percent(down_payment_percent),
            annual_interest_rate_percent: percent(annual_interest_rate_percent),
            tenure_years,
        }
    }

    /// `None` when the amount falls outside the decimal range
    pub fn down_payment(&self) -> Option<Money> {
        self.property_value.checked_percentage(self.down_payment_percent)
    }

    pub fn principal(&self) -> Option<Money> {
        self.property_value.checked_sub(self.down_payment()?)
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_interest_rate_percent)
    }

    /// `None` when the tenure in months does not fit a `u32`
    pub fn number_of_months(&self) -> Option<u32> {
        self.tenure_years.checked_mul(12)
    }

    /// property value and tenure must be positive for a meaningful loan
    pub fn is_computable(&self) -> bool {
        self.property_value.is_positive() && self.tenure_years > 0 && self.number_of_months().is_some()
    }
}

/// outputs of the EMI calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_payable: Money,
    pub total_interest: Money,
    pub principal: Money,
    pub down_payment: Money,
    pub number_of_months: u32,
}

impl LoanResult {
    /// fail-soft result for incomplete or nonsensical input
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn is_zeroed(&self) -> bool {
        *self == Self::default()
    }

    /// serialize to json for api responses
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

/// an area magnitude tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaValue {
    pub magnitude: Decimal,
    pub unit: AreaUnit,
}

impl AreaValue {
    pub fn new(magnitude: Decimal, unit: AreaUnit) -> Self {
        Self { magnitude, unit }
    }

    /// convert into another unit
    pub fn to_unit(&self, unit: AreaUnit) -> AreaValue {
        AreaValue {
            magnitude: crate::area::convert_area(self.magnitude, self.unit, unit),
            unit,
        }
    }

    /// `None` when the magnitude is too large to express in square feet
    pub fn in_sq_feet(&self) -> Option<Decimal> {
        self.magnitude.checked_mul(self.unit.sq_feet_factor())
    }
}
