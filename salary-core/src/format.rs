//! Display formatting for money and percentages.
//!
//! Formatting never consults process-wide locale state; the caller passes a
//! [`NumberLocale`] so output is identical on every machine.

use std::borrow::Cow;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_half_toward_pos_inf, round_whole_units};

/// Currency symbol and digit grouping used when rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub currency_symbol: Cow<'static, str>,
    pub grouping_separator: char,
}

impl NumberLocale {
    pub const EN_US: NumberLocale = NumberLocale {
        currency_symbol: Cow::Borrowed("$"),
        grouping_separator: ',',
    };

    pub fn new(
        currency_symbol: impl Into<Cow<'static, str>>,
        grouping_separator: char,
    ) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            grouping_separator,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

/// Formats an amount as whole currency units with digit grouping.
///
/// Fractions are rounded half away from zero. Negative amounts get a leading
/// minus sign before the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::{NumberLocale, format_currency};
///
/// assert_eq!(format_currency(dec!(120000), &NumberLocale::EN_US), "$120,000");
/// assert_eq!(format_currency(dec!(27999.5), &NumberLocale::EN_US), "$28,000");
/// assert_eq!(format_currency(dec!(-1500), &NumberLocale::EN_US), "-$1,500");
/// ```
pub fn format_currency(
    amount: Decimal,
    locale: &NumberLocale,
) -> String {
    let rounded = round_whole_units(amount);
    let digits = rounded.abs().trunc().normalize().to_string();
    let grouped = group_digits(&digits, locale.grouping_separator);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", locale.currency_symbol, grouped)
    } else {
        format!("{}{}", locale.currency_symbol, grouped)
    }
}

/// Formats the savings percentage that corresponds to a region retention fraction.
///
/// `format_percentage(p) == round((1 - p) * 100) + "%"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::format_percentage;
///
/// assert_eq!(format_percentage(dec!(0.20)), "80%");
/// assert_eq!(format_percentage(dec!(0.35)), "65%");
/// ```
pub fn format_percentage(fraction: Decimal) -> String {
    format_whole_percent((Decimal::ONE - fraction) * dec!(100))
}

/// Formats an already computed percentage as a whole number with a `%` suffix.
pub fn format_whole_percent(percent: Decimal) -> String {
    format!("{}%", round_half_toward_pos_inf(percent).normalize())
}

fn group_digits(
    digits: &str,
    separator: char,
) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
