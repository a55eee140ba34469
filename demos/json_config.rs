/// json config - load a dollar configuration and compute in cents
use pro_housing_rs::{format_amount, AmortizationCalculator, CalculatorConfig, LoanParameters, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = CalculatorConfig::usd().to_json()?;
    let config = CalculatorConfig::from_json(&json)?;

    let params = LoanParameters::new(Money::from_major(450_000), dec!(20), dec!(6.75), 30);
    let result = AmortizationCalculator::new(&config.currency).compute(&params);

    println!("monthly payment: {}", format_amount(result.monthly_payment, &config.currency));
    println!("total interest:  {}", format_amount(result.total_interest, &config.currency));

    Ok(())
}
