// https://bheisler.github.io/criterion.rs/book/getting_started.html

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricing::simulation::rn_generator;
use pricing::{black_scholes_price, monte_carlo_price, simulate_path, MarketModel, OptionContract};

criterion_group!(benches, criterion_call_pricing);
criterion_main!(benches);

pub fn criterion_call_pricing(c: &mut Criterion) {
    let model = MarketModel::new(1.0, 0.02, 0.1, 2.0);
    let contract = OptionContract::new(1.0);

    let mut group = c.benchmark_group("European call pricing");

    group.bench_function("single daily path over two years", |b| {
        let mut generator = rn_generator(42);
        b.iter(|| simulate_path(black_box(&model), &mut generator))
    });
    group.bench_function("monte carlo with 1000 paths", |b| {
        let mut generator = rn_generator(42);
        b.iter(|| monte_carlo_price(black_box(1_000), &model, &contract, &mut generator))
    });
    group.bench_function("black scholes closed form", |b| {
        b.iter(|| black_scholes_price(black_box(&model), black_box(&contract)))
    });

    group.finish()
}
