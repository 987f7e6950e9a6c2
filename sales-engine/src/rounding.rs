use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amounts in a report carry exactly this many decimal places
pub const MONEY_SCALE: u32 = 2;

/// Round a monetary amount to cents, half away from zero.
///
/// The result always has a scale of exactly [`MONEY_SCALE`], so `20` becomes
/// `20.00`. Rounding an already-rounded amount is a no-op.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never increases the scale, so this only pads with zeros
    rounded.rescale(MONEY_SCALE);
    rounded
}
