use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::common::models::MarketModel;

/// Calendar days per year; paths are simulated with one step per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Number of whole days in `maturity` years. Truncates, so anything shorter
/// than a day (or non-positive) yields 0 steps.
pub fn steps_per_path(maturity: f64) -> usize {
    (maturity * DAYS_PER_YEAR).floor() as usize
}

/// Euler-Maruyama discretization of the SDE
/// '''math
/// dS_t = mu S_t dt + sigma S_t dW_t
/// ''', where each step adds $S_t (mu dt + sigma sqrt(dt) Z)$ for $Z ~ N(0, 1)$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
/// https://en.wikipedia.org/wiki/Euler%E2%80%93Maruyama_method
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// drift per step, mu * dt
    step_drift: f64,
    /// volatility per step, sigma * sqrt(dt)
    step_vola: f64,
    nr_steps: usize,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, step_drift: f64, step_vola: f64, nr_steps: usize) -> Self {
        Self {
            initial_value,
            step_drift,
            step_vola,
            nr_steps,
        }
    }

    /// Daily steps up to the model's maturity. Under the risk neutral measure
    /// the drift is the risk-free rate; it is apportioned linearly per day,
    /// the volatility with the square root of the day fraction.
    pub fn daily(model: &MarketModel) -> Self {
        Self::new(
            model.initial_price,
            model.rfr / DAYS_PER_YEAR,
            model.vola / DAYS_PER_YEAR.sqrt(),
            steps_per_path(model.maturity),
        )
    }

    pub fn nr_steps(&self) -> usize {
        self.nr_steps
    }

    #[inline]
    pub fn step(&self, st: f64, z: f64) -> f64 {
        let d_st = self.step_drift * st + self.step_vola * st * z;
        st + d_st // d_St = S_t+1 - St
    }

    /// Runs all steps from the initial value, one standard normal draw each.
    /// The price is not floored: a large enough shock takes it below 0.
    pub fn terminal_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (0..self.nr_steps).fold(self.initial_value, |st, _| {
            self.step(st, rng.sample(StandardNormal))
        })
    }
}

impl Distribution<f64> for GeometricBrownianMotion {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.terminal_value(rng)
    }
}

/// One terminal price of `model`'s daily discretized path.
pub fn simulate_path<R: Rng + ?Sized>(model: &MarketModel, rng: &mut R) -> f64 {
    GeometricBrownianMotion::daily(model).terminal_value(rng)
}
