//! Statistics computed directly from binned counts
//!
//! A histogram is a pair of sequences: `bins`, the `B + 1` strictly
//! increasing bin edges, and `counts`, the `B` observation counts where
//! `counts[i]` observations fall in `[bins[i], bins[i + 1])`.
//!
//! Every statistic here treats each observation as sitting at its bin center
//! and agrees with the ordinary statistic computed on the exploded sample
//! returned by [`Histogram::to_values`], without materializing it.
//!
//! Statistics that are undefined for the data (empty histogram, exhausted
//! degrees of freedom) are returned as `None`.

use serde::{Deserialize, Serialize};

use crate::error::{HistogramError, HistogramResult};
use crate::options::VarianceOptions;

/// A bin count: an integer count or a non-negative float weight
pub trait BinCount: Copy {
    /// The count as a float
    fn to_f64(self) -> f64;
}

macro_rules! impl_bin_count {
    ($($t:ty),*) => {
        $(
            impl BinCount for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_bin_count!(u8, u16, u32, u64, usize, i32, i64, f32, f64);

/// Width of each bin: `bins[i + 1] - bins[i]`
pub fn bin_widths(bins: &[f64]) -> Vec<f64> {
    bins.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Midpoint of each bin
pub fn bin_centers(bins: &[f64]) -> Vec<f64> {
    bins.windows(2).map(|w| w[0] + (w[1] - w[0]) / 2.0).collect()
}

/// Step-function ECDF of a histogram
///
/// `x` starts with a repeat of the first bin center so that the curve begins
/// at `y = 0`; plot it as a post-step function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedEcdf {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl BinnedEcdf {
    /// Number of step points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Summary statistics of a histogram
///
/// Each field is `None` when the statistic is undefined for the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSummary {
    /// Total number of observations
    pub count: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    /// Sample variance (`ddof = 1`)
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub median: Option<f64>,
    /// Interquartile range
    pub iqr: Option<f64>,
}

/// Validated, borrowed view over bin edges and counts
#[derive(Debug, Clone, Copy)]
pub struct Histogram<'a, C> {
    bins: &'a [f64],
    counts: &'a [C],
}

impl<'a, C: BinCount> Histogram<'a, C> {
    /// Wrap `bins` and `counts`, checking the histogram invariants
    pub fn new(bins: &'a [f64], counts: &'a [C]) -> HistogramResult<Self> {
        if bins.len() != counts.len() + 1 {
            return Err(HistogramError::LengthMismatch {
                bins: bins.len(),
                counts: counts.len(),
                expected: bins.len().saturating_sub(1),
            });
        }

        if let Some(index) = bins.iter().position(|b| !b.is_finite()) {
            return Err(HistogramError::NonIncreasingEdges { index });
        }
        if let Some(index) = bins.windows(2).position(|w| w[1] <= w[0]) {
            return Err(HistogramError::NonIncreasingEdges { index: index + 1 });
        }

        // `!(c >= 0.0)` also rejects NaN weights
        if let Some(index) = counts.iter().position(|c| !(c.to_f64() >= 0.0)) {
            return Err(HistogramError::NegativeCount { index });
        }

        Ok(Self { bins, counts })
    }

    pub fn bins(&self) -> &'a [f64] {
        self.bins
    }

    pub fn counts(&self) -> &'a [C] {
        self.counts
    }

    /// Number of bins
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn widths(&self) -> Vec<f64> {
        bin_widths(self.bins)
    }

    pub fn centers(&self) -> Vec<f64> {
        bin_centers(self.bins)
    }

    /// Explode into one value per observation, each at its bin center
    ///
    /// Requires whole-number counts.
    pub fn to_values(&self) -> HistogramResult<Vec<f64>> {
        let mut values = Vec::with_capacity(self.count() as usize);
        for (index, (&count, center)) in self.counts.iter().zip(self.centers()).enumerate() {
            let count = count.to_f64();
            if count.fract() != 0.0 {
                return Err(HistogramError::NonIntegralCount { index });
            }
            values.extend(std::iter::repeat(center).take(count as usize));
        }
        Ok(values)
    }

    /// Total number of observations
    pub fn count(&self) -> f64 {
        self.counts.iter().map(|c| c.to_f64()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0.0
    }

    /// Center of the lowest non-empty bin
    pub fn min(&self) -> Option<f64> {
        let i = self.counts.iter().position(|c| c.to_f64() != 0.0)?;
        Some(self.center(i))
    }

    /// Center of the highest non-empty bin
    pub fn max(&self) -> Option<f64> {
        let i = self.counts.iter().rposition(|c| c.to_f64() != 0.0)?;
        Some(self.center(i))
    }

    /// Count-weighted mean of the bin centers
    pub fn mean(&self) -> Option<f64> {
        let n = self.count();
        if n == 0.0 {
            return None;
        }

        let weighted: f64 = self
            .counts
            .iter()
            .zip(self.centers())
            .map(|(c, x)| c.to_f64() * x)
            .sum();
        Some(weighted / n)
    }

    /// Variance with denominator `n - ddof`, optionally Sheppard-corrected
    ///
    /// Sheppard's correction subtracts `width^2 / 12` and fails with
    /// [`HistogramError::Precondition`] unless all bin widths are equal within
    /// `options.width_tolerance`. The corrected variance can be negative for
    /// sparse data; it is returned as is.
    ///
    /// Returns `None` when `n <= ddof`, before the widths are inspected.
    pub fn var(&self, options: &VarianceOptions) -> HistogramResult<Option<f64>> {
        let Some(var) = self.raw_variance(options.ddof) else {
            return Ok(None);
        };
        if !options.sheppard {
            return Ok(Some(var));
        }

        let width = self.common_width(options)?;
        let corrected = var - width * width / 12.0;
        tracing::debug!(width, var, corrected, "applied Sheppard's correction");
        if corrected < 0.0 {
            tracing::warn!(corrected, "Sheppard-corrected variance is negative");
        }
        Ok(Some(corrected))
    }

    /// Square root of [`Histogram::var`]
    ///
    /// A negative corrected variance gives `Some(NaN)`.
    pub fn std(&self, options: &VarianceOptions) -> HistogramResult<Option<f64>> {
        Ok(self.var(options)?.map(f64::sqrt))
    }

    /// Quantile with linear interpolation between observations
    ///
    /// Matches the default linear-interpolation quantile of the exploded
    /// sample: the virtual index `q * (n - 1)` is located among the cumulative
    /// counts and, when it falls between the last observation of one bin and
    /// the first of the next non-empty bin, the two centers are interpolated.
    pub fn quantile(&self, q: f64) -> HistogramResult<Option<f64>> {
        check_quantile(q)?;
        Ok(self.quantile_unchecked(q))
    }

    /// Several quantiles at once
    pub fn quantiles(&self, qs: &[f64]) -> HistogramResult<Vec<Option<f64>>> {
        for &q in qs {
            check_quantile(q)?;
        }
        Ok(qs.iter().map(|&q| self.quantile_unchecked(q)).collect())
    }

    pub fn median(&self) -> Option<f64> {
        self.quantile_unchecked(0.5)
    }

    /// Interquartile range (`q75 - q25`)
    pub fn iqr(&self) -> Option<f64> {
        Some(self.quantile_unchecked(0.75)? - self.quantile_unchecked(0.25)?)
    }

    /// Step-function ECDF, `None` for an empty histogram
    pub fn ecdf(&self) -> Option<BinnedEcdf> {
        let total = self.count();
        if total == 0.0 {
            return None;
        }

        let centers = self.centers();
        let mut x = Vec::with_capacity(centers.len() + 1);
        x.push(centers[0]);
        x.extend_from_slice(&centers);

        let mut y = Vec::with_capacity(centers.len() + 1);
        y.push(0.0);
        y.extend(self.cumulative_counts().into_iter().map(|c| c / total));

        Some(BinnedEcdf { x, y })
    }

    /// All summary statistics with default options
    pub fn summary(&self) -> HistogramSummary {
        let variance = self.raw_variance(1);
        HistogramSummary {
            count: self.count(),
            min: self.min(),
            max: self.max(),
            mean: self.mean(),
            variance,
            std_dev: variance.map(f64::sqrt),
            median: self.median(),
            iqr: self.iqr(),
        }
    }

    fn center(&self, i: usize) -> f64 {
        self.bins[i] + (self.bins[i + 1] - self.bins[i]) / 2.0
    }

    fn cumulative_counts(&self) -> Vec<f64> {
        self.counts
            .iter()
            .scan(0.0, |acc, c| {
                *acc += c.to_f64();
                Some(*acc)
            })
            .collect()
    }

    fn raw_variance(&self, ddof: u32) -> Option<f64> {
        let n = self.count();
        let ddof = f64::from(ddof);
        if n <= ddof {
            return None;
        }

        let mean = self.mean()?;
        let ss: f64 = self
            .counts
            .iter()
            .zip(self.centers())
            .map(|(c, x)| c.to_f64() * (x - mean).powi(2))
            .sum();
        Some(ss / (n - ddof))
    }

    fn common_width(&self, options: &VarianceOptions) -> HistogramResult<f64> {
        let widths = self.widths();
        let first = widths
            .first()
            .copied()
            .ok_or_else(|| HistogramError::precondition("histogram has no bins"))?;

        if widths
            .iter()
            .all(|&w| options.width_tolerance.is_close(w, first))
        {
            Ok(first)
        } else {
            Err(HistogramError::precondition(
                "bin widths must be equal to apply Sheppard's correction",
            ))
        }
    }

    fn quantile_unchecked(&self, q: f64) -> Option<f64> {
        let n = self.count();
        if n == 0.0 {
            return None;
        }

        let virt_idx = q * (n - 1.0);
        if virt_idx <= 0.0 {
            return self.min();
        }
        if virt_idx >= n - 1.0 {
            return self.max();
        }

        let centers = self.centers();
        let right_edge = self.cumulative_counts();

        // Bin holding the virtual index
        let i = right_edge.partition_point(|&e| e < virt_idx);
        let mut val = centers[i];

        // Between this bin's last observation and the next non-empty bin
        let last_pos = right_edge[i] - 1.0;
        if virt_idx > last_pos {
            let next_i = right_edge.partition_point(|&e| e - 1.0 < virt_idx);
            val += (virt_idx - last_pos) * (centers[next_i] - centers[i]);
        }

        Some(val)
    }
}

fn check_quantile(q: f64) -> HistogramResult<()> {
    if (0.0..=1.0).contains(&q) {
        Ok(())
    } else {
        Err(HistogramError::precondition(format!(
            "q must be in range [0, 1], got {}",
            q
        )))
    }
}

// Free-function interface. Each call validates the histogram first.

/// Explode a histogram into one bin center per observation
pub fn bincount_to_values<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Vec<f64>> {
    Histogram::new(bins, counts)?.to_values()
}

/// Total number of observations
pub fn bincount_count<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<f64> {
    Ok(Histogram::new(bins, counts)?.count())
}

pub fn bincount_isempty<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<bool> {
    Ok(Histogram::new(bins, counts)?.is_empty())
}

pub fn bincount_min<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Option<f64>> {
    Ok(Histogram::new(bins, counts)?.min())
}

pub fn bincount_max<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Option<f64>> {
    Ok(Histogram::new(bins, counts)?.max())
}

pub fn bincount_mean<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Option<f64>> {
    Ok(Histogram::new(bins, counts)?.mean())
}

pub fn bincount_var<C: BinCount>(
    bins: &[f64],
    counts: &[C],
    options: &VarianceOptions,
) -> HistogramResult<Option<f64>> {
    Histogram::new(bins, counts)?.var(options)
}

pub fn bincount_std<C: BinCount>(
    bins: &[f64],
    counts: &[C],
    options: &VarianceOptions,
) -> HistogramResult<Option<f64>> {
    Histogram::new(bins, counts)?.std(options)
}

pub fn bincount_quantile<C: BinCount>(
    bins: &[f64],
    counts: &[C],
    q: f64,
) -> HistogramResult<Option<f64>> {
    Histogram::new(bins, counts)?.quantile(q)
}

pub fn bincount_quantiles<C: BinCount>(
    bins: &[f64],
    counts: &[C],
    qs: &[f64],
) -> HistogramResult<Vec<Option<f64>>> {
    Histogram::new(bins, counts)?.quantiles(qs)
}

pub fn bincount_median<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Option<f64>> {
    Ok(Histogram::new(bins, counts)?.median())
}

pub fn bincount_iqr<C: BinCount>(bins: &[f64], counts: &[C]) -> HistogramResult<Option<f64>> {
    Ok(Histogram::new(bins, counts)?.iqr())
}

pub fn bincount_ecdf<C: BinCount>(
    bins: &[f64],
    counts: &[C],
) -> HistogramResult<Option<BinnedEcdf>> {
    Ok(Histogram::new(bins, counts)?.ecdf())
}
