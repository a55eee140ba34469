//! Presentation helpers for amounts and areas. Nothing in here feeds back
//! into a calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::area::{AreaUnit, AREA_DP};
use crate::config::{CurrencyConfig, DigitGrouping};
use crate::decimal::{round_half_up, Money};

const CRORE: Decimal = dec!(10000000);
const LAKH: Decimal = dec!(100000);
const THOUSAND: Decimal = dec!(1000);

/// group the integer digits of a decimal, keeping sign and fraction as-is
pub fn group_digits(value: Decimal, grouping: DigitGrouping) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = match grouping {
        DigitGrouping::Western => group_from_right(int_part, 3, 3),
        // last three digits, then pairs
        DigitGrouping::Indian => group_from_right(int_part, 3, 2),
    };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

fn group_from_right(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (h, t) = remaining.split_at(remaining.len() - rest);
        groups.push(t);
        remaining = h;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}

/// full currency string, e.g. "₹34,713" or "$1,234.50"
pub fn format_amount(amount: Money, currency: &CurrencyConfig) -> String {
    let rounded = round_half_up(amount.as_decimal(), currency.decimal_places);
    // pad to a fixed number of decimals, the way a currency formatter does
    let fixed = format!("{:.*}", currency.decimal_places as usize, rounded);
    let value: Decimal = fixed.parse().unwrap_or(rounded);
    let grouped = group_digits(value.abs(), currency.grouping);

    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}{}", currency.symbol, grouped)
    } else {
        format!("{}{}", currency.symbol, grouped)
    }
}

/// abbreviated currency string: Cr, Lakh and K for large amounts
///
/// Falls back to [`format_amount`] when abbreviation is disabled or the
/// amount is below a thousand.
pub fn format_amount_short(amount: Money, currency: &CurrencyConfig) -> String {
    let value = amount.as_decimal();
    if !currency.abbreviate || value.abs() < THOUSAND {
        return format_amount(amount, currency);
    }

    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= CRORE {
        (magnitude / CRORE, "Cr")
    } else if magnitude >= LAKH {
        (magnitude / LAKH, "Lakh")
    } else {
        (magnitude / THOUSAND, "K")
    };

    // sign leads the symbol, as in the full form
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}{:.2} {}", sign, currency.symbol, round_half_up(scaled, 2), suffix)
}

/// area with grouped digits and a unit label; "N/A" for non-positive values
pub fn format_area(value: Decimal, unit: AreaUnit, show_full_name: bool) -> String {
    format_area_grouped(value, unit, show_full_name, DigitGrouping::Indian)
}

pub fn format_area_grouped(
    value: Decimal,
    unit: AreaUnit,
    show_full_name: bool,
    grouping: DigitGrouping,
) -> String {
    if value <= Decimal::ZERO {
        return "N/A".to_string();
    }

    let magnitude = round_half_up(value, AREA_DP).normalize();
    let label = if show_full_name {
        unit.full_name()
    } else {
        unit.short_label()
    };

    format!("{} {}", group_digits(magnitude, grouping), label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_digits(dec!(999), DigitGrouping::Indian), "999");
        assert_eq!(group_digits(dec!(1000), DigitGrouping::Indian), "1,000");
        assert_eq!(group_digits(dec!(100000), DigitGrouping::Indian), "1,00,000");
        assert_eq!(group_digits(dec!(1234567), DigitGrouping::Indian), "12,34,567");
        assert_eq!(group_digits(dec!(123456789.5), DigitGrouping::Indian), "12,34,56,789.5");
        assert_eq!(group_digits(dec!(-43560), DigitGrouping::Indian), "-43,560");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(group_digits(dec!(1234567), DigitGrouping::Western), "1,234,567");
        assert_eq!(group_digits(dec!(123456.78), DigitGrouping::Western), "123,456.78");
    }

    #[test]
    fn test_format_amount_inr() {
        let inr = CalculatorConfig::inr().currency;
        assert_eq!(format_amount(Money::from_major(34_713), &inr), "₹34,713");
        assert_eq!(format_amount(Money::from_decimal(dec!(34712.93)), &inr), "₹34,713");
        assert_eq!(format_amount(Money::from_major(8_331_103), &inr), "₹83,31,103");
        assert_eq!(format_amount(Money::ZERO, &inr), "₹0");
    }

    #[test]
    fn test_format_amount_usd() {
        let usd = CalculatorConfig::usd().currency;
        assert_eq!(format_amount(Money::from_decimal(dec!(1234.5)), &usd), "$1,234.50");
        assert_eq!(format_amount(Money::from_major(-20), &usd), "-$20.00");
    }

    #[test]
    fn test_format_amount_short() {
        let inr = CalculatorConfig::inr().currency;
        assert_eq!(format_amount_short(Money::from_major(50_000_000), &inr), "₹5.00 Cr");
        assert_eq!(format_amount_short(Money::from_major(4_331_103), &inr), "₹43.31 Lakh");
        assert_eq!(format_amount_short(Money::from_major(34_713), &inr), "₹34.71 K");
        assert_eq!(format_amount_short(Money::from_major(950), &inr), "₹950");
        assert_eq!(format_amount_short(Money::from_major(-4_331_103), &inr), "-₹43.31 Lakh");
        assert_eq!(format_amount_short(Money::from_major(-34_713), &inr), "-₹34.71 K");
        assert_eq!(
            format_amount_short(Money::from_major(-4_331_103), &inr),
            format!("-{}", format_amount_short(Money::from_major(4_331_103), &inr))
        );

        // abbreviation disabled
        let usd = CalculatorConfig::usd().currency;
        assert_eq!(format_amount_short(Money::from_major(50_000_000), &usd), "$50,000,000.00");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(dec!(1200), AreaUnit::SqFeet, false), "1,200 Sq Ft");
        assert_eq!(format_area(dec!(1200), AreaUnit::SqFeet, true), "1,200 Square Feet");
        assert_eq!(format_area(dec!(111.48), AreaUnit::SqMeter, false), "111.48 Sq M");
        assert_eq!(format_area(dec!(2.50), AreaUnit::Acre, true), "2.5 Acres");
        assert_eq!(format_area(dec!(4356000), AreaUnit::SqFeet, false), "43,56,000 Sq Ft");
    }

    #[test]
    fn test_format_area_not_available() {
        assert_eq!(format_area(Decimal::ZERO, AreaUnit::Acre, false), "N/A");
        assert_eq!(format_area(dec!(-3), AreaUnit::Bigha, true), "N/A");
    }

    #[test]
    fn test_format_area_western() {
        assert_eq!(
            format_area_grouped(dec!(4356000), AreaUnit::SqFeet, false, DigitGrouping::Western),
            "4,356,000 Sq Ft"
        );
    }
}
