use crate::common::error::PricingError;

/// Longest accepted maturity in years. Bounds the daily step count of a path.
pub const MAX_MATURITY: f64 = 100.0;

/// Parameters of the underlying's price dynamics
/// '''math
/// dS_t = r S_t dt + sigma S_t dW_t
/// '''
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketModel {
    /// the asset's price at time 0
    pub initial_price: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    /// time to expiration in years
    pub maturity: f64,
}

impl MarketModel {
    pub fn new(initial_price: f64, rfr: f64, vola: f64, maturity: f64) -> Self {
        Self {
            initial_price,
            rfr,
            vola,
            maturity,
        }
    }

    /// Checks `initial_price > 0`, `0 < maturity <= MAX_MATURITY`, `vola >= 0` and that
    /// every field is finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        check("initial_price", self.initial_price, |v| v > 0.0)?;
        check("rfr", self.rfr, |_| true)?;
        check("vola", self.vola, |v| v >= 0.0)?;
        check("maturity", self.maturity, |v| v > 0.0 && v <= MAX_MATURITY)
    }

    /// exp(-r * T)
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.maturity).exp()
    }
}

/// A European call, exercised only at the model's maturity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionContract {
    /// the strike or exercise price of the asset
    pub strike: f64,
}

impl OptionContract {
    pub fn new(strike: f64) -> Self {
        Self { strike }
    }

    /// A zero strike is accepted: the call then pays the terminal price itself.
    pub fn validate(&self) -> Result<(), PricingError> {
        check("strike", self.strike, |v| v >= 0.0)
    }
}

fn check(
    name: &'static str,
    value: f64,
    admissible: impl Fn(f64) -> bool,
) -> Result<(), PricingError> {
    if value.is_finite() && admissible(value) {
        Ok(())
    } else {
        Err(PricingError::InvalidModelParameter { name, value })
    }
}
