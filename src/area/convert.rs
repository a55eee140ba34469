use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

use crate::area::AreaUnit;
use crate::config::AreaBounds;
use crate::decimal::round_half_up;

/// decimal places kept in converted areas
pub const AREA_DP: u32 = 2;

/// convert an area between units through square feet
///
/// Non-positive values yield zero. Converting to the same unit returns the
/// value untouched; any other conversion is rounded to two decimals.
pub fn convert_area(value: Decimal, from: AreaUnit, to: AreaUnit) -> Decimal {
    if value <= Decimal::ZERO {
        debug!(%value, %from, %to, "non-positive area, returning zero");
        return Decimal::ZERO;
    }

    if from == to {
        return value;
    }

    let sq_feet = match value.checked_mul(from.sq_feet_factor()) {
        Some(sq_feet) => sq_feet,
        None => {
            debug!(%value, %from, %to, "area exceeds decimal range, returning zero");
            return Decimal::ZERO;
        }
    };
    round_half_up(sq_feet / to.sq_feet_factor(), AREA_DP)
}

/// convert a value into every supported unit
pub fn get_all_conversions(value: Decimal, original_unit: AreaUnit) -> BTreeMap<AreaUnit, Decimal> {
    AreaUnit::ALL
        .into_iter()
        .map(|unit| (unit, convert_area(value, original_unit, unit)))
        .collect()
}

/// sanity check for listing sizes, between 50 sq ft and 1000 acres
pub fn is_valid_area(value: Decimal, unit: AreaUnit) -> bool {
    is_valid_area_within(value, unit, &AreaBounds::default())
}

/// sanity check against custom bounds
pub fn is_valid_area_within(value: Decimal, unit: AreaUnit, bounds: &AreaBounds) -> bool {
    value
        .checked_mul(unit.sq_feet_factor())
        .map_or(false, |sq_feet| bounds.contains(sq_feet))
}
