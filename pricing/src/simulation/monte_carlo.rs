use rand::Rng;
use rand_distr::Distribution;

/// Draws a fixed number of independent samples from a path sampler.
pub struct MonteCarloPathSimulator {
    pub nr_paths: usize,
}

impl MonteCarloPathSimulator {
    pub fn new(nr_paths: usize) -> Self {
        Self { nr_paths }
    }

    /// Lazy, finite sequence of `nr_paths` samples. Every sample consumes
    /// its own draws from `rng`, so the sequence cannot be replayed.
    pub fn samples<'a, D, R>(
        &self,
        sampler: &'a D,
        rng: &'a mut R,
    ) -> impl Iterator<Item = f64> + 'a
    where
        D: Distribution<f64>,
        R: Rng,
    {
        rng.sample_iter(sampler).take(self.nr_paths)
    }

    /// Maps every sample through `path_fn` and reduces the results.
    pub fn simulate_with<D, R>(
        &self,
        sampler: &D,
        rng: &mut R,
        path_fn: impl Fn(f64) -> f64,
    ) -> SampleStatistics
    where
        D: Distribution<f64>,
        R: Rng,
    {
        self.samples(sampler, rng).map(path_fn).collect()
    }
}

/// Running sums over a stream of samples.
///
/// Partial statistics of disjoint batches combine with [`SampleStatistics::merge`],
/// so batches can be reduced independently and joined afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleStatistics {
    nr_samples: usize,
    sum: f64,
    sum_sq: f64,
}

impl SampleStatistics {
    pub fn push(self, value: f64) -> Self {
        Self {
            nr_samples: self.nr_samples + 1,
            sum: self.sum + value,
            sum_sq: self.sum_sq + value * value,
        }
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            nr_samples: self.nr_samples + other.nr_samples,
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }

    pub fn nr_samples(&self) -> usize {
        self.nr_samples
    }

    /// Arithmetic mean, sum divided by count.
    pub fn mean(&self) -> Option<f64> {
        if self.nr_samples == 0 {
            return None;
        }
        Some(self.sum / self.nr_samples as f64)
    }

    /// Unbiased sample variance; needs at least two samples.
    pub fn variance(&self) -> Option<f64> {
        if self.nr_samples < 2 {
            return None;
        }
        let n = self.nr_samples as f64;
        let centered = self.sum_sq - self.sum * self.sum / n;
        // cancellation can leave a tiny negative remainder
        Some(centered.max(0.0) / (n - 1.0))
    }

    /// Standard deviation of the mean.
    pub fn standard_error(&self) -> Option<f64> {
        self.variance()
            .map(|variance| (variance / self.nr_samples as f64).sqrt())
    }
}

impl FromIterator<f64> for SampleStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SampleStatistics::default(), SampleStatistics::push)
    }
}
