/// area converter - every unit for a listing's plot size
use pro_housing_rs::{format_area, get_all_conversions, is_valid_area, AreaUnit};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // listing data arrives as text
    let magnitude: Decimal = "2400".parse()?;
    let unit: AreaUnit = "sqft".parse()?;

    if !is_valid_area(magnitude, unit) {
        println!("implausible listing size: {}", format_area(magnitude, unit, true));
        return Ok(());
    }

    for (target, value) in get_all_conversions(magnitude, unit) {
        println!("{:>12}: {}", target.full_name(), format_area(value, target, false));
    }

    // unknown units are rejected at the parsing boundary
    if let Err(e) = "marla".parse::<AreaUnit>() {
        println!("{}", e);
    }

    Ok(())
}
