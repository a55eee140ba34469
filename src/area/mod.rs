pub mod convert;
pub mod unit;

pub use convert::{convert_area, get_all_conversions, is_valid_area, is_valid_area_within, AREA_DP};
pub use unit::AreaUnit;
