//! Rounding shared by the calculators and formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest integer with midpoints going toward positive infinity.
///
/// This is the rounding used for whole-percent figures, so `79.5` becomes `80`
/// and `-0.5` becomes `0`. Total over the whole `Decimal` range.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_toward_pos_inf;
///
/// assert_eq!(round_half_toward_pos_inf(dec!(79.5)), dec!(80));
/// assert_eq!(round_half_toward_pos_inf(dec!(79.49)), dec!(79));
/// assert_eq!(round_half_toward_pos_inf(dec!(-0.5)), dec!(0));
/// ```
pub fn round_half_toward_pos_inf(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}

/// Rounds to whole units with midpoints away from zero, as currency display does.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_whole_units;
///
/// assert_eq!(round_whole_units(dec!(16000.5)), dec!(16001));
/// assert_eq!(round_whole_units(dec!(-16000.5)), dec!(-16001));
/// ```
pub fn round_whole_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_toward_pos_inf tests
    // =========================================================================

    #[test]
    fn round_half_toward_pos_inf_rounds_down_below_midpoint() {
        assert_eq!(round_half_toward_pos_inf(dec!(64.49)), dec!(64));
    }

    #[test]
    fn round_half_toward_pos_inf_rounds_up_at_midpoint() {
        assert_eq!(round_half_toward_pos_inf(dec!(64.5)), dec!(65));
    }

    #[test]
    fn round_half_toward_pos_inf_moves_negative_midpoint_toward_zero() {
        assert_eq!(round_half_toward_pos_inf(dec!(-2.5)), dec!(-2));
    }

    #[test]
    fn round_half_toward_pos_inf_handles_extreme_values() {
        assert_eq!(round_half_toward_pos_inf(Decimal::MAX), Decimal::MAX);
        assert_eq!(round_half_toward_pos_inf(Decimal::MIN), Decimal::MIN);
    }

    #[test]
    fn round_half_toward_pos_inf_preserves_integers() {
        assert_eq!(round_half_toward_pos_inf(dec!(80)), dec!(80));
        assert_eq!(round_half_toward_pos_inf(dec!(0)), dec!(0));
    }

    // =========================================================================
    // round_whole_units tests
    // =========================================================================

    #[test]
    fn round_whole_units_rounds_cents() {
        assert_eq!(round_whole_units(dec!(27999.49)), dec!(27999));
        assert_eq!(round_whole_units(dec!(27999.50)), dec!(28000));
    }

    #[test]
    fn round_whole_units_rounds_negative_midpoint_away_from_zero() {
        assert_eq!(round_whole_units(dec!(-0.5)), dec!(-1));
    }
}
