//! Monte Carlo vs. Black-Scholes report for a European call option.
//!
//! Prices the call by simulation for an increasing number of paths and prints
//! each estimate next to the closed-form value:
//!
//! ```text
//! report --initial-price 1 --rate 0.02 --volatility 0.1 --maturity 2 --strike 1 --seed 42
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pricing::simulation::rn_generator;
use pricing::{MarketModel, OptionContract};

mod table;

/// Compare Monte Carlo estimates of a European call with Black-Scholes
#[derive(Parser, Debug)]
#[command(name = "report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Price of the underlying today
    #[arg(long, default_value_t = 1.0)]
    initial_price: f64,

    /// Annualized risk-free rate
    #[arg(long, default_value_t = 0.02, allow_negative_numbers = true)]
    rate: f64,

    /// Annualized volatility
    #[arg(long, default_value_t = 0.1)]
    volatility: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 2.0)]
    maturity: f64,

    /// Strike of the call
    #[arg(long, default_value_t = 1.0)]
    strike: f64,

    /// Numbers of simulated paths, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [100, 1_000, 10_000, 20_000, 50_000, 100_000]
    )]
    samples: Vec<usize>,

    /// Seed of the random number generator; drawn from OS entropy if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let model = MarketModel::new(cli.initial_price, cli.rate, cli.volatility, cli.maturity);
    let contract = OptionContract::new(cli.strike);

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, ?model, ?contract, "pricing European call");

    let mut generator = rn_generator(seed);
    let comparison = table::compare(&cli.samples, &model, &contract, &mut generator)
        .context("failed to price the call")?;

    print!("{comparison}");
    Ok(())
}
