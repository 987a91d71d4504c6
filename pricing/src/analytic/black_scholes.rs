use probability::distribution::{Distribution, Gaussian};
use tracing::trace;

use crate::common::error::PricingError;
use crate::common::models::{MarketModel, OptionContract};
use crate::common::precision::round_price;

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// European call option price for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// Unrounded value of the call.
    ///
    /// Fails with [`PricingError::NumericDomain`] if the volatility or the maturity
    /// is 0, since then `d1` divides by `sigma * sqrt(T) = 0`. A zero strike
    /// yields the limit `S_0`.
    pub fn call(model: &MarketModel, contract: &OptionContract) -> Result<f64, PricingError> {
        if model.vola == 0.0 || model.maturity == 0.0 {
            return Err(PricingError::NumericDomain {
                volatility: model.vola,
                maturity: model.maturity,
            });
        }
        model.validate()?;
        contract.validate()?;

        if contract.strike == 0.0 {
            return Ok(model.initial_price);
        }

        let sigma_exp = model.vola * model.maturity.sqrt();
        let d1 = ((model.initial_price / contract.strike).ln()
            + (model.rfr + model.vola.powi(2) / 2.0) * model.maturity)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        Ok(cdf(d1) * model.initial_price - cdf(d2) * contract.strike * model.discount_factor())
    }
}

/// Black-Scholes value of the call, rounded to 7 decimals.
pub fn black_scholes_price(
    model: &MarketModel,
    contract: &OptionContract,
) -> Result<f64, PricingError> {
    let value = BlackScholesMerton::call(model, contract)?;
    trace!(value, "black scholes call");
    Ok(round_price(value))
}
