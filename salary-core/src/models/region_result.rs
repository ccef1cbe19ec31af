use rust_decimal::Decimal;
use serde::Serialize;

use crate::{CalculationInput, Region};

/// Estimated cost of one role in one region. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub region: Region,

    /// `us_salary * region.percentage`
    pub local_salary: Decimal,

    /// `us_salary - local_salary`
    pub savings: Decimal,

    /// `(1 - region.percentage) * 100`, independent of salary.
    pub savings_percentage: Decimal,
}

/// A validated input together with its per-region results, in region table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub input: CalculationInput,
    pub results: Vec<CalculationResult>,
}

impl Comparison {
    pub fn role_title(&self) -> &str {
        self.input.role_title()
    }

    pub fn us_salary(&self) -> Decimal {
        self.input.us_salary()
    }
}
