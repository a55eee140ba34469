use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;

/// area units used in property listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AreaUnit {
    SqFeet,
    SqMeter,
    SqYard,
    Acre,
    Hectare,
    /// regional, varies by state
    Bigha,
    /// regional, varies by state
    Katha,
    Gunta,
    Cent,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 9] = [
        AreaUnit::SqFeet,
        AreaUnit::SqMeter,
        AreaUnit::SqYard,
        AreaUnit::Acre,
        AreaUnit::Hectare,
        AreaUnit::Bigha,
        AreaUnit::Katha,
        AreaUnit::Gunta,
        AreaUnit::Cent,
    ];

    /// square feet in one unit
    pub fn sq_feet_factor(&self) -> Decimal {
        match self {
            AreaUnit::SqFeet => dec!(1),
            AreaUnit::SqMeter => dec!(10.764),
            AreaUnit::SqYard => dec!(9),
            AreaUnit::Acre => dec!(43560),
            AreaUnit::Hectare => dec!(107639.1),
            AreaUnit::Bigha => dec!(26909.8),
            AreaUnit::Katha => dec!(1361.25),
            AreaUnit::Gunta => dec!(1089),
            AreaUnit::Cent => dec!(435.6),
        }
    }

    /// stable lowercase key used in listing data
    pub fn key(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "sqft",
            AreaUnit::SqMeter => "sqm",
            AreaUnit::SqYard => "sqyd",
            AreaUnit::Acre => "acre",
            AreaUnit::Hectare => "hectare",
            AreaUnit::Bigha => "bigha",
            AreaUnit::Katha => "katha",
            AreaUnit::Gunta => "gunta",
            AreaUnit::Cent => "cent",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "Sq Ft",
            AreaUnit::SqMeter => "Sq M",
            AreaUnit::SqYard => "Sq Yd",
            AreaUnit::Acre => "Acre",
            AreaUnit::Hectare => "Hectare",
            AreaUnit::Bigha => "Bigha",
            AreaUnit::Katha => "Katha",
            AreaUnit::Gunta => "Gunta",
            AreaUnit::Cent => "Cent",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "Square Feet",
            AreaUnit::SqMeter => "Square Meter",
            AreaUnit::SqYard => "Square Yard",
            AreaUnit::Acre => "Acres",
            AreaUnit::Hectare => "Hectares",
            AreaUnit::Bigha => "Bigha",
            AreaUnit::Katha => "Katha",
            AreaUnit::Gunta => "Gunta",
            AreaUnit::Cent => "Cents",
        }
    }

    fn screaming_name(&self) -> &'static str {
        match self {
            AreaUnit::SqFeet => "SQ_FEET",
            AreaUnit::SqMeter => "SQ_METER",
            AreaUnit::SqYard => "SQ_YARD",
            AreaUnit::Acre => "ACRE",
            AreaUnit::Hectare => "HECTARE",
            AreaUnit::Bigha => "BIGHA",
            AreaUnit::Katha => "KATHA",
            AreaUnit::Gunta => "GUNTA",
            AreaUnit::Cent => "CENT",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AreaUnit {
    type Err = CalculatorError;

    /// accepts keys ("sqft"), SCREAMING names ("SQ_FEET") and labels ("Sq Ft")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AreaUnit::ALL
            .into_iter()
            .find(|unit| {
                [unit.key(), unit.screaming_name(), unit.short_label(), unit.full_name()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| CalculatorError::InvalidUnit {
                unit: s.to_string(),
            })
    }
}

impl TryFrom<String> for AreaUnit {
    type Error = CalculatorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AreaUnit> for String {
    fn from(unit: AreaUnit) -> Self {
        unit.key().to_string()
    }
}
