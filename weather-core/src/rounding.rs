use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round to two fractional digits, half away from zero, in decimal arithmetic.
///
/// The value is taken at its shortest round-trip decimal form, so `25.505` rounds
/// to `25.51` even though the nearest `f64` sits just below the midpoint.
/// Non-finite input is returned unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_str(&value.to_string())
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_string()
                .parse::<f64>()
                .ok()
        })
        // Magnitudes beyond Decimal's 96-bit range carry no fractional digits anyway.
        .unwrap_or(value)
}
