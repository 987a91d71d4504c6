use rand::Rng;
use tracing::debug;

use crate::common::error::PricingError;
use crate::common::models::{MarketModel, OptionContract};
use crate::common::precision::round_price;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{MonteCarloPathSimulator, SampleStatistics};

/// Unrounded result of a Monte Carlo run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    /// mean of the discounted, floored payoffs
    pub price: f64,
    /// `None` for a single path
    pub standard_error: Option<f64>,
    pub nr_paths: usize,
}

/// European call priced by averaging the discounted payoffs of daily Euler paths.
pub struct MonteCarloEuropeanOption {
    model: MarketModel,
    contract: OptionContract,
    mc_simulator: MonteCarloPathSimulator,
}

impl MonteCarloEuropeanOption {
    pub fn new(
        model: MarketModel,
        contract: OptionContract,
        nr_paths: usize,
    ) -> Result<Self, PricingError> {
        if nr_paths == 0 {
            return Err(PricingError::InvalidSampleCount(nr_paths));
        }
        model.validate()?;
        contract.validate()?;

        Ok(Self {
            model,
            contract,
            mc_simulator: MonteCarloPathSimulator::new(nr_paths),
        })
    }

    /// The signed difference is discounted before the floor at 0 is applied.
    /// Both orders agree since the discount factor is positive.
    fn call_payoff(&self, disc_factor: f64, terminal_price: f64) -> f64 {
        ((terminal_price - self.contract.strike) * disc_factor).max(0.0)
    }

    pub fn sample_payoffs<R: Rng>(&self, rng: &mut R) -> SampleStatistics {
        let stock_gbm: GeometricBrownianMotion = self.into();
        let disc_factor = self.model.discount_factor();

        debug!(
            nr_paths = self.mc_simulator.nr_paths,
            nr_steps = stock_gbm.nr_steps(),
            "simulating call payoffs"
        );

        self.mc_simulator
            .simulate_with(&stock_gbm, rng, |terminal_price| {
                self.call_payoff(disc_factor, terminal_price)
            })
    }

    /// The theoretical value of the call together with its standard error.
    pub fn call<R: Rng>(&self, rng: &mut R) -> McEstimate {
        let payoffs = self.sample_payoffs(rng);
        McEstimate {
            // at least one path is guaranteed by the constructor
            price: payoffs.mean().unwrap_or(f64::NAN),
            standard_error: payoffs.standard_error(),
            nr_paths: payoffs.nr_samples(),
        }
    }
}

impl From<&MonteCarloEuropeanOption> for GeometricBrownianMotion {
    fn from(mceo: &MonteCarloEuropeanOption) -> Self {
        // under the risk neutral measure we have mu = r
        GeometricBrownianMotion::daily(&mceo.model)
    }
}

/// Monte Carlo estimate of the call from `sample_count` independent paths, unrounded.
pub fn monte_carlo_estimate<R: Rng>(
    sample_count: usize,
    model: &MarketModel,
    contract: &OptionContract,
    rng: &mut R,
) -> Result<McEstimate, PricingError> {
    let mc_option = MonteCarloEuropeanOption::new(*model, *contract, sample_count)?;
    let estimate = mc_option.call(rng);
    debug!(
        price = estimate.price,
        standard_error = ?estimate.standard_error,
        "Monte Carlo estimate"
    );
    Ok(estimate)
}

/// Monte Carlo price of the call, rounded to 7 decimals.
///
/// Consumes `sample_count * floor(365 * maturity)` standard normal draws from `rng`.
pub fn monte_carlo_price<R: Rng>(
    sample_count: usize,
    model: &MarketModel,
    contract: &OptionContract,
    rng: &mut R,
) -> Result<f64, PricingError> {
    monte_carlo_estimate(sample_count, model, contract, rng)
        .map(|estimate| round_price(estimate.price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::rng::rn_generator;
    use assert_approx_eq::assert_approx_eq;

    /// NOTE: the tolerance will depend on the number of samples paths and the volatility
    const TOLERANCE: f64 = 5e-3;

    fn reference_model() -> MarketModel {
        MarketModel::new(1.0, 0.02, 0.1, 2.0)
    }

    #[test]
    fn european_call() {
        let call_price = monte_carlo_price(
            20_000,
            &reference_model(),
            &OptionContract::new(1.0),
            &mut rn_generator(42),
        )
        .unwrap();
        // black scholes ref: 0.0770641
        assert_approx_eq!(call_price, 0.0770641, TOLERANCE);
        assert_eq!(call_price, (call_price * 1e7).round() / 1e7);
    }

    #[test]
    fn european_call_golden_value() {
        let call_price = monte_carlo_price(
            100_000,
            &reference_model(),
            &OptionContract::new(1.0),
            &mut rn_generator(42),
        )
        .unwrap();
        assert_eq!(call_price, 0.0770001);
        assert_approx_eq!(call_price, 0.0770641, 2e-3); // black scholes ref
    }

    #[test]
    fn seeded_runs_reproduce() {
        let model = reference_model();
        let contract = OptionContract::new(1.0);
        let first = monte_carlo_price(2_000, &model, &contract, &mut rn_generator(5)).unwrap();
        let second = monte_carlo_price(2_000, &model, &contract, &mut rn_generator(5)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_vola_is_deterministic() {
        let model = MarketModel::new(1.0, 0.02, 0.0, 2.0);
        let contract = OptionContract::new(1.0);

        // (S_0 (1 + r / 365)^730 - K) exp(-r T)
        for sample_count in [1, 10, 250] {
            let call_price =
                monte_carlo_price(sample_count, &model, &contract, &mut rn_generator(1)).unwrap();
            assert_approx_eq!(call_price, 0.0392095, 1e-9);
        }

        let estimate = monte_carlo_estimate(250, &model, &contract, &mut rn_generator(1)).unwrap();
        assert_approx_eq!(estimate.standard_error.unwrap(), 0.0, 1e-9);
    }

    #[test]
    fn zero_vola_out_of_the_money() {
        let model = MarketModel::new(1.0, 0.02, 0.0, 2.0);
        let call_price =
            monte_carlo_price(10, &model, &OptionContract::new(1.1), &mut rn_generator(1)).unwrap();
        assert_eq!(call_price, 0.0);
    }

    #[test]
    fn zero_step_paths() {
        // floor(0.002 * 365) = 0, every path ends at S_0
        let model = MarketModel::new(1.0, 0.02, 0.1, 0.002);
        let contract = OptionContract::new(0.9);
        let estimate = monte_carlo_estimate(100, &model, &contract, &mut rn_generator(9)).unwrap();

        let expected = 0.1 * (-0.02 * 0.002_f64).exp();
        assert_approx_eq!(estimate.price, expected, 1e-12);
        assert_eq!(estimate.nr_paths, 100);
    }

    #[test]
    fn zero_strike_pays_discounted_terminal_price() {
        let call_price = monte_carlo_price(
            20_000,
            &reference_model(),
            &OptionContract::new(0.0),
            &mut rn_generator(17),
        )
        .unwrap();
        // S_0 (1 + r / 365)^730 exp(-r T) = 0.99999...
        assert_approx_eq!(call_price, 1.0, 1e-2);
    }

    #[test]
    fn standard_error_of_estimate() {
        let estimate = monte_carlo_estimate(
            10_000,
            &reference_model(),
            &OptionContract::new(1.0),
            &mut rn_generator(23),
        )
        .unwrap();
        assert_eq!(estimate.nr_paths, 10_000);
        // payoff sd is about 0.1
        assert_approx_eq!(estimate.standard_error.unwrap(), 1e-3, 3e-4);
    }

    #[test]
    fn single_path_has_no_standard_error() {
        let estimate = monte_carlo_estimate(
            1,
            &reference_model(),
            &OptionContract::new(1.0),
            &mut rn_generator(23),
        )
        .unwrap();
        assert_eq!(estimate.standard_error, None);
        assert!(estimate.price >= 0.0);
    }

    #[test]
    fn invalid_inputs() {
        let contract = OptionContract::new(1.0);
        let mut generator = rn_generator(1);

        assert_eq!(
            monte_carlo_price(0, &reference_model(), &contract, &mut generator),
            Err(PricingError::InvalidSampleCount(0))
        );

        let negative_price = MarketModel::new(-1.0, 0.02, 0.1, 2.0);
        assert!(matches!(
            monte_carlo_price(10, &negative_price, &contract, &mut generator),
            Err(PricingError::InvalidModelParameter { name: "initial_price", .. })
        ));

        let expired = MarketModel::new(1.0, 0.02, 0.1, 0.0);
        assert!(matches!(
            monte_carlo_price(10, &expired, &contract, &mut generator),
            Err(PricingError::InvalidModelParameter { name: "maturity", .. })
        ));

        let endless = MarketModel::new(1.0, 0.02, 0.1, 1e300);
        assert!(matches!(
            monte_carlo_price(10, &endless, &contract, &mut generator),
            Err(PricingError::InvalidModelParameter { name: "maturity", .. })
        ));

        let negative_strike = OptionContract::new(-1.0);
        assert!(matches!(
            monte_carlo_price(10, &reference_model(), &negative_strike, &mut generator),
            Err(PricingError::InvalidModelParameter { name: "strike", .. })
        ));
    }
}
