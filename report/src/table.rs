use std::fmt;

use rand::Rng;
use tracing::info;

use pricing::common::precision::round_price;
use pricing::{
    black_scholes_price, monte_carlo_estimate, MarketModel, McEstimate, OptionContract,
    PricingError,
};

/// Monte Carlo estimates along a ladder of path counts, plus the closed form.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub estimates: Vec<McEstimate>,
    pub black_scholes: f64,
}

/// Runs one simulation per entry of `ladder`, in order, all drawing from `rng`.
pub fn compare<R: Rng>(
    ladder: &[usize],
    model: &MarketModel,
    contract: &OptionContract,
    rng: &mut R,
) -> Result<Comparison, PricingError> {
    let estimates = ladder
        .iter()
        .map(|nr_paths| {
            let estimate = monte_carlo_estimate(*nr_paths, model, contract, rng)?;
            info!(nr_paths, price = estimate.price, "simulation done");
            Ok(estimate)
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    let black_scholes = black_scholes_price(model, contract)?;

    Ok(Comparison {
        estimates,
        black_scholes,
    })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of simulations | expected value")?;
        for estimate in &self.estimates {
            write!(f, "{}: {}", estimate.nr_paths, round_price(estimate.price))?;
            match estimate.standard_error {
                Some(se) => writeln!(f, " (+/- {})", round_price(se))?,
                None => writeln!(f)?,
            }
        }
        writeln!(f, "Black Scholes: {}", self.black_scholes)
    }
}
