pub mod european_option;
pub mod gbm;
pub mod monte_carlo;
pub mod rng;

pub use gbm::GeometricBrownianMotion;
pub use monte_carlo::{MonteCarloPathSimulator, SampleStatistics};
pub use rng::rn_generator;
