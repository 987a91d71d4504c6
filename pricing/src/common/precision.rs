/// Number of decimal places of every reported price.
pub const PRICE_DECIMALS: i32 = 7;

/// Rounds a price to [`PRICE_DECIMALS`] places, half away from zero.
/// Only applied at the boundary of the public pricing functions.
pub fn round_price(value: f64) -> f64 {
    let scale = 10_f64.powi(PRICE_DECIMALS);
    (value * scale).round() / scale
}
