use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::types::LoanParameters;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub currency: CurrencyConfig,
    pub loan_limits: LoanInputLimits,
    pub area_bounds: AreaBounds,
}

/// how currency amounts are rounded and rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
    /// 0 rounds to whole rupees; 2 rounds to cents
    pub decimal_places: u32,
    pub grouping: DigitGrouping,
    /// use Cr/Lakh/K abbreviations for large amounts
    pub abbreviate: bool,
}

/// thousands separator layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitGrouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    Western,
}

/// slider ranges applied where form values are collected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInputLimits {
    pub min_property_value: Money,
    pub max_property_value: Money,
    pub min_down_payment_percent: Decimal,
    pub max_down_payment_percent: Decimal,
    pub min_interest_rate_percent: Decimal,
    pub max_interest_rate_percent: Decimal,
    pub min_tenure_years: u32,
    pub max_tenure_years: u32,
}

/// plausible listing size in square feet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaBounds {
    pub min_sq_feet: Decimal,
    pub max_sq_feet: Decimal,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::inr()
    }
}

impl CalculatorConfig {
    /// rupee configuration used by the listing site
    pub fn inr() -> Self {
        Self {
            currency: CurrencyConfig {
                code: "INR".to_string(),
                symbol: "₹".to_string(),
                decimal_places: 0,
                grouping: DigitGrouping::Indian,
                abbreviate: true,
            },
            loan_limits: LoanInputLimits::default(),
            area_bounds: AreaBounds::default(),
        }
    }

    /// dollar configuration, rounding to cents
    pub fn usd() -> Self {
        Self {
            currency: CurrencyConfig {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                decimal_places: 2,
                grouping: DigitGrouping::Western,
                abbreviate: false,
            },
            loan_limits: LoanInputLimits {
                min_property_value: Money::from_major(10_000),
                max_property_value: Money::from_major(100_000_000),
                ..LoanInputLimits::default()
            },
            area_bounds: AreaBounds::default(),
        }
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.currency.decimal_places > 8 {
            return Err(invalid(format!(
                "currency precision {} exceeds 8 decimal places",
                self.currency.decimal_places
            )));
        }

        let limits = &self.loan_limits;
        if limits.min_property_value.is_negative() || limits.min_property_value > limits.max_property_value {
            return Err(invalid(format!(
                "property value range {}..{} is inverted or negative",
                limits.min_property_value, limits.max_property_value
            )));
        }
        if limits.min_down_payment_percent < Decimal::ZERO
            || limits.max_down_payment_percent > Decimal::ONE_HUNDRED
            || limits.min_down_payment_percent > limits.max_down_payment_percent
        {
            return Err(invalid(format!(
                "down payment range {}..{} must lie within 0..100",
                limits.min_down_payment_percent, limits.max_down_payment_percent
            )));
        }
        if limits.min_interest_rate_percent < Decimal::ZERO
            || limits.min_interest_rate_percent > limits.max_interest_rate_percent
        {
            return Err(invalid(format!(
                "interest rate range {}..{} is inverted or negative",
                limits.min_interest_rate_percent, limits.max_interest_rate_percent
            )));
        }
        if limits.min_tenure_years == 0 || limits.min_tenure_years > limits.max_tenure_years {
            return Err(invalid(format!(
                "tenure range {}..{} must start at one year or more",
                limits.min_tenure_years, limits.max_tenure_years
            )));
        }

        let bounds = &self.area_bounds;
        if bounds.min_sq_feet <= Decimal::ZERO || bounds.min_sq_feet > bounds.max_sq_feet {
            return Err(invalid(format!(
                "area bounds {}..{} are inverted or non-positive",
                bounds.min_sq_feet, bounds.max_sq_feet
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> CalculatorError {
    CalculatorError::InvalidConfiguration { message }
}

impl Default for LoanInputLimits {
    fn default() -> Self {
        Self {
            min_property_value: Money::from_major(100_000),
            max_property_value: Money::from_major(1_000_000_000),
            min_down_payment_percent: Decimal::ZERO,
            max_down_payment_percent: dec!(100),
            min_interest_rate_percent: Decimal::ZERO,
            max_interest_rate_percent: dec!(30),
            min_tenure_years: 1,
            max_tenure_years: 30,
        }
    }
}

impl LoanInputLimits {
    /// clamp raw form values into the slider ranges
    pub fn clamp(&self, params: &LoanParameters) -> LoanParameters {
        let property_value = params
            .property_value
            .max(self.min_property_value)
            .min(self.max_property_value);
        let down_payment_percent = params
            .down_payment_percent
            .clamp(self.min_down_payment_percent, self.max_down_payment_percent);
        let annual_interest_rate_percent = params
            .annual_interest_rate_percent
            .clamp(self.min_interest_rate_percent, self.max_interest_rate_percent);
        let tenure_years = params
            .tenure_years
            .clamp(self.min_tenure_years, self.max_tenure_years);

        if property_value != params.property_value {
            debug!(from = %params.property_value, to = %property_value, "clamped property value");
        }
        if down_payment_percent != params.down_payment_percent {
            debug!(from = %params.down_payment_percent, to = %down_payment_percent, "clamped down payment percent");
        }
        if annual_interest_rate_percent != params.annual_interest_rate_percent {
            debug!(from = %params.annual_interest_rate_percent, to = %annual_interest_rate_percent, "clamped interest rate");
        }
        if tenure_years != params.tenure_years {
            debug!(from = params.tenure_years, to = tenure_years, "clamped tenure");
        }

        LoanParameters {
            property_value,
            down_payment_percent,
            annual_interest_rate_percent,
            tenure_years,
        }
    }
}

impl Default for AreaBounds {
    fn default() -> Self {
        Self {
            min_sq_feet: dec!(50),
            // 1000 acres
            max_sq_feet: dec!(43560000),
        }
    }
}

impl AreaBounds {
    pub fn contains(&self, sq_feet: Decimal) -> bool {
        sq_feet >= self.min_sq_feet && sq_feet <= self.max_sq_feet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.currency.symbol, "₹");
        assert_eq!(config.currency.decimal_places, 0);
        assert_eq!(config.currency.grouping, DigitGrouping::Indian);
        assert!(config.validate().is_ok());
        assert!(CalculatorConfig::usd().validate().is_ok());
    }

    #[test]
    fn test_clamp_out_of_range_inputs() {
        let limits = LoanInputLimits::default();
        let raw = LoanParameters::new(Money::from_major(500), dec!(120), dec!(-2), 45);

        let clamped = limits.clamp(&raw);
        assert_eq!(clamped.property_value, Money::from_major(100_000));
        assert_eq!(clamped.down_payment_percent, dec!(100));
        assert_eq!(clamped.annual_interest_rate_percent, Decimal::ZERO);
        assert_eq!(clamped.tenure_years, 30);
    }

    #[test]
    fn test_clamp_keeps_valid_inputs() {
        let limits = LoanInputLimits::default();
        let raw = LoanParameters::new(Money::from_major(5_000_000), dec!(20), dec!(8.5), 20);
        assert_eq!(limits.clamp(&raw), raw);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::usd();
        let json = config.to_json().unwrap();
        let parsed = CalculatorConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let mut config = CalculatorConfig::inr();
        config.loan_limits.min_tenure_years = 40;
        let json = config.to_json().unwrap();

        match CalculatorConfig::from_json(&json) {
            Err(CalculatorError::InvalidConfiguration { message }) => {
                assert!(message.contains("tenure"));
            }
            other => panic!("expected invalid configuration, got {:?}", other),
        }

        assert!(matches!(
            CalculatorConfig::from_json("{ not json"),
            Err(CalculatorError::Json(_))
        ));
    }

    #[test]
    fn test_area_bounds() {
        let bounds = AreaBounds::default();
        assert!(bounds.contains(dec!(50)));
        assert!(bounds.contains(dec!(43560000)));
        assert!(!bounds.contains(dec!(49.99)));
        assert!(!bounds.contains(dec!(43560000.01)));
    }
}
