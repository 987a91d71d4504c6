use rand::SeedableRng;
use rand_hc::Hc128Rng;

/// The seedable generator every simulation draws its standard normals from.
/// Equal seeds give equal draw sequences, hence reproducible prices.
pub fn rn_generator(seed_nr: u64) -> Hc128Rng {
    Hc128Rng::seed_from_u64(seed_nr)
}
