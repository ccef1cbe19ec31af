pub mod calculations;
pub mod format;
pub mod lead;
pub mod models;
pub mod share;
pub mod state;

pub use calculations::{compute_comparison, compute_region_result};
pub use format::{NumberLocale, format_currency, format_percentage, format_whole_percent};
pub use models::*;
pub use state::{CalculatorAction, CalculatorState, Notice};
