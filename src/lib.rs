pub mod area;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod loan;
pub mod types;

// re-export key types
pub use area::{convert_area, get_all_conversions, is_valid_area, AreaUnit};
pub use config::{AreaBounds, CalculatorConfig, CurrencyConfig, DigitGrouping, LoanInputLimits};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use format::{format_amount, format_amount_short, format_area};
pub use loan::{compute_loan, compute_loan_f64, AmortizationCalculator, AmortizationSchedule};
pub use types::{AreaValue, LoanParameters, LoanResult};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
