//! Per-region savings estimates.
//!
//! For a U.S. salary `s` and a region retention fraction `p`:
//!
//! | Figure | Formula |
//! |--------|---------|
//! | local salary | `s * p` |
//! | savings | `s - local salary` |
//! | savings percentage | `(1 - p) * 100` |
//!
//! Because all figures are [`Decimal`], `local_salary + savings == s` holds
//! exactly for every region.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{CalculationInput, compute_comparison};
//!
//! let input = CalculationInput::new("Product Designer", dec!(80000)).unwrap();
//! let comparison = compute_comparison(&input);
//!
//! let philippines = &comparison.results[0];
//! assert_eq!(philippines.region.name, "Philippines");
//! assert_eq!(philippines.local_salary, dec!(16000));
//! assert_eq!(philippines.savings, dec!(64000));
//! assert_eq!(philippines.savings_percentage, dec!(80));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::{CalculationInput, CalculationResult, Comparison, REGIONS, Region};

/// Computes the estimate for a single region.
///
/// `us_salary` is expected to be positive; callers get that guarantee by going
/// through [`CalculationInput`]. The function itself is total and performs no
/// rounding.
pub fn compute_region_result(
    us_salary: Decimal,
    region: &Region,
) -> CalculationResult {
    let local_salary = us_salary * region.percentage;
    let savings = us_salary - local_salary;
    let savings_percentage = (Decimal::ONE - region.percentage) * dec!(100);

    CalculationResult {
        region: *region,
        local_salary,
        savings,
        savings_percentage,
    }
}

/// Computes estimates for every region in [`REGIONS`], in table order.
pub fn compute_comparison(input: &CalculationInput) -> Comparison {
    debug!(%input, "computing regional comparison");
    let results = REGIONS
        .iter()
        .map(|region| compute_region_result(input.us_salary(), region))
        .collect();

    Comparison {
        input: input.clone(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn region(percentage: Decimal) -> Region {
        Region {
            percentage,
            ..REGIONS[0]
        }
    }

    #[test]
    fn local_salary_and_savings_sum_to_us_salary() {
        let salaries = [dec!(1), dec!(0.01), dec!(65000), dec!(123456.78), dec!(9999999)];

        for salary in salaries {
            for region in &REGIONS {
                let result = compute_region_result(salary, region);

                assert_eq!(
                    result.local_salary + result.savings,
                    salary,
                    "{} at {}",
                    region.name,
                    salary
                );
            }
        }
    }

    #[test]
    fn savings_percentage_does_not_depend_on_salary() {
        for region in &REGIONS {
            let low = compute_region_result(dec!(100), region);
            let high = compute_region_result(dec!(250000), region);

            assert_eq!(low.savings_percentage, high.savings_percentage);
            assert_eq!(
                low.savings_percentage,
                (Decimal::ONE - region.percentage) * dec!(100)
            );
        }
    }

    #[test]
    fn full_retention_means_no_savings() {
        let result = compute_region_result(dec!(50000), &region(Decimal::ONE));

        assert_eq!(result.local_salary, dec!(50000));
        assert_eq!(result.savings, dec!(0));
        assert_eq!(result.savings_percentage, dec!(0));
    }

    #[test]
    fn results_are_not_rounded() {
        let result = compute_region_result(dec!(1000.01), &region(dec!(0.35)));

        assert_eq!(result.local_salary, dec!(350.0035));
        assert_eq!(result.savings, dec!(650.0065));
    }

    #[test]
    fn comparison_covers_every_region_in_order() {
        let input = CalculationInput::new("Software Engineer", dec!(120000)).unwrap();

        let comparison = compute_comparison(&input);
        let names: Vec<_> = comparison.results.iter().map(|r| r.region.name).collect();

        assert_eq!(names, vec!["Philippines", "Latin America", "South Africa"]);
        assert_eq!(comparison.role_title(), "Software Engineer");
        assert_eq!(comparison.us_salary(), dec!(120000));
    }
}
