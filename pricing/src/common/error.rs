use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid model parameter '{name}': {value}")]
    InvalidModelParameter { name: &'static str, value: f64 },
    #[error("invalid sample count {0}: at least one path is required")]
    InvalidSampleCount(usize),
    /// sigma * sqrt(T) vanishes, so d1 is a division by 0
    #[error("closed form undefined for volatility {volatility} and maturity {maturity}")]
    NumericDomain { volatility: f64, maturity: f64 },
}
