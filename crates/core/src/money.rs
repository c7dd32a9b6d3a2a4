//! Fixed-point money helpers.
//!
//! Prices are stored as NUMERIC(15,2). Every money value leaving the service
//! carries exactly [`MONEY_SCALE`] fractional digits, so an empty aggregate
//! reads `0.00` rather than `0`.

use rust_decimal::Decimal;

/// Number of fractional digits in every money value.
pub const MONEY_SCALE: u32 = 2;

/// Largest price representable by NUMERIC(15,2).
pub fn max_price() -> Decimal {
    Decimal::new(999_999_999_999_999, MONEY_SCALE)
}

/// Normalise a decimal to exactly two fractional digits.
///
/// Values with more digits are rounded half away from zero, matching
/// PostgreSQL's NUMERIC rounding.
pub fn to_money(value: Decimal) -> Decimal {
    let mut v = value.round_dp_with_strategy(
        MONEY_SCALE,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    v.rescale(MONEY_SCALE);
    v
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn zero_gets_two_fractional_digits() {
        assert_eq!(to_money(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn integer_gets_padded() {
        assert_eq!(to_money(Decimal::from(2000)).to_string(), "2000.00");
    }

    #[test]
    fn two_digit_value_is_unchanged() {
        let v = Decimal::from_str("19.99").unwrap();
        assert_eq!(to_money(v).to_string(), "19.99");
    }

    #[test]
    fn extra_digits_round_half_away_from_zero() {
        assert_eq!(to_money(Decimal::from_str("1.005").unwrap()).to_string(), "1.01");
        assert_eq!(to_money(Decimal::from_str("1.004").unwrap()).to_string(), "1.00");
    }

    #[test]
    fn max_price_has_fifteen_digits() {
        assert_eq!(max_price().to_string(), "9999999999999.99");
    }
}
