use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Reasons a role title / salary pair cannot be used for a comparison.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("role title is required")]
    MissingRoleTitle,

    #[error("salary is required")]
    MissingSalary,

    #[error("invalid salary '{0}'")]
    InvalidSalary(String),

    #[error("salary must be greater than zero, got {0}")]
    NonPositiveSalary(Decimal),
}

/// Validated calculator input. Construct with [`CalculationInput::new`] or
/// [`CalculationInput::parse`]; both reject empty titles and salaries <= 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationInput {
    role_title: String,
    us_salary: Decimal,
}

impl CalculationInput {
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::{CalculationInput, InputError};
    ///
    /// let input = CalculationInput::new("Product Designer", dec!(80000)).unwrap();
    /// assert_eq!(input.us_salary(), dec!(80000));
    ///
    /// assert_eq!(
    ///     CalculationInput::new("  ", dec!(80000)),
    ///     Err(InputError::MissingRoleTitle)
    /// );
    /// ```
    pub fn new(
        role_title: impl Into<String>,
        us_salary: Decimal,
    ) -> Result<Self, InputError> {
        let role_title = role_title.into();
        if role_title.trim().is_empty() {
            return Err(InputError::MissingRoleTitle);
        }
        if us_salary <= Decimal::ZERO {
            return Err(InputError::NonPositiveSalary(us_salary));
        }
        Ok(Self {
            role_title,
            us_salary,
        })
    }

    /// Validates raw form text.
    pub fn parse(
        role_title: &str,
        us_salary: &str,
    ) -> Result<Self, InputError> {
        if role_title.trim().is_empty() {
            return Err(InputError::MissingRoleTitle);
        }
        Self::new(role_title, parse_salary(us_salary)?)
    }

    pub fn role_title(&self) -> &str {
        &self.role_title
    }

    pub fn us_salary(&self) -> Decimal {
        self.us_salary
    }
}

impl fmt::Display for CalculationInput {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} at {}", self.role_title, self.us_salary)
    }
}

/// Parses salary field text. Surrounding whitespace and comma grouping are
/// accepted (`"120,000"`); empty text is [`InputError::MissingSalary`].
pub fn parse_salary(text: &str) -> Result<Decimal, InputError> {
    let normalized = text.trim().replace(',', "");
    if normalized.is_empty() {
        return Err(InputError::MissingSalary);
    }
    normalized.parse::<Decimal>().map_err(|e| {
        debug!(input = %text, "rejected salary: {}", e);
        InputError::InvalidSalary(text.to_string())
    })
}
