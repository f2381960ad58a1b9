//! Random resampling of a histogram
//!
//! Draws bins with probability proportional to their counts and optionally
//! spreads each draw uniformly across its bin. The result only approximates
//! the original data; compare it with statistical tolerances.

use rand::distributions::{Distribution, Uniform, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{HistogramError, HistogramResult};
use crate::histogram::{BinCount, Histogram};
use crate::options::SampleOptions;

impl<'a, C: BinCount> Histogram<'a, C> {
    /// Draw `options.n` values, seeded when `options.seed` is set
    ///
    /// An empty histogram yields `n` NaN values.
    pub fn sample(&self, options: &SampleOptions) -> HistogramResult<Vec<f64>> {
        match options.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.sample_with_rng(options.n, options.uniform_noise, &mut rng)
            }
            None => {
                let mut rng = rand::thread_rng();
                self.sample_with_rng(options.n, options.uniform_noise, &mut rng)
            }
        }
    }

    /// Draw `n` values using the given generator
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        uniform_noise: bool,
        rng: &mut R,
    ) -> HistogramResult<Vec<f64>> {
        if self.is_empty() {
            return Ok(vec![f64::NAN; n]);
        }

        let weights = self.counts().iter().map(|c| c.to_f64());
        let bin_dist = WeightedIndex::new(weights)
            .map_err(|e| HistogramError::precondition(format!("cannot sample counts: {}", e)))?;
        let noise = Uniform::new(-0.5, 0.5);

        let centers = self.centers();
        let widths = self.widths();

        tracing::debug!(n, uniform_noise, bins = self.num_bins(), "sampling histogram");

        let values = (0..n)
            .map(|_| {
                let i = bin_dist.sample(rng);
                if uniform_noise {
                    centers[i] + noise.sample(rng) * widths[i]
                } else {
                    centers[i]
                }
            })
            .collect();

        Ok(values)
    }
}

/// Draw values from a histogram, see [`Histogram::sample`]
pub fn bincount_sample<C: BinCount>(
    bins: &[f64],
    counts: &[C],
    options: &SampleOptions,
) -> HistogramResult<Vec<f64>> {
    Histogram::new(bins, counts)?.sample(options)
}
