/// emi calculator - what the loan widget beside a listing shows
use pro_housing_rs::chrono::NaiveDate;
use pro_housing_rs::{
    format_amount, format_amount_short, AmortizationCalculator, AmortizationSchedule,
    CalculatorConfig, LoanParameters, Money,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let config = CalculatorConfig::inr();
    let calculator = AmortizationCalculator::new(&config.currency);

    // raw slider values, one of them out of range
    let raw = LoanParameters::new(Money::from_major(5_000_000), dec!(20), dec!(8.5), 35);
    let params = config.loan_limits.clamp(&raw);

    let result = calculator.compute(&params);
    println!("monthly EMI:    {}", format_amount(result.monthly_payment, &config.currency));
    println!("total interest: {}", format_amount_short(result.total_interest, &config.currency));
    println!("total payable:  {}", format_amount_short(result.total_payable, &config.currency));

    let start = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid start date")?;
    let schedule = AmortizationSchedule::generate(&params, start, &calculator);
    for year in schedule.yearly.iter().take(5) {
        println!(
            "year {:>2}: principal {} interest {} balance {}",
            year.year,
            format_amount(year.principal_paid, &config.currency),
            format_amount(year.interest_paid, &config.currency),
            format_amount(year.ending_balance, &config.currency),
        );
    }

    println!("{}", result.json());

    Ok(())
}
