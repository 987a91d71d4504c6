pub mod analytic;
pub mod common;
pub mod simulation;

pub use analytic::black_scholes::black_scholes_price;
pub use common::error::PricingError;
pub use common::models::{MarketModel, OptionContract};
pub use simulation::european_option::{monte_carlo_estimate, monte_carlo_price, McEstimate};
pub use simulation::gbm::simulate_path;
