//! binstat-stats - Statistics computed directly from histograms
//!
//! Works on `(bin edges, bin counts)` pairs without exploding them into one
//! value per observation:
//!
//! - **Merge**: element-wise summing of count arrays sharing a binning
//! - **Geometry**: bin widths, bin centers, explicit expansion to values
//! - **Moments**: count, mean, variance (with `ddof` and Sheppard's correction)
//! - **Order statistics**: min, max, quantiles, median, IQR, step ECDF
//! - **Resampling**: random draws reproducing the binned distribution
//!
//! Each statistic agrees with the ordinary statistic of the exploded sample
//! in which every observation sits at its bin center. Undefined results (for
//! example the mean of an empty histogram) are `None`.
//!
//! # Example
//!
//! ```
//! use binstat_stats::{Histogram, VarianceOptions};
//!
//! let bins = [0.0, 1.0, 2.0, 3.0];
//! let counts = [1u32, 2, 1];
//! let hist = Histogram::new(&bins, &counts)?;
//!
//! assert_eq!(hist.mean(), Some(1.5));
//! assert_eq!(hist.median(), Some(1.5));
//! assert!(hist.var(&VarianceOptions::default())?.is_some());
//! # Ok::<(), binstat_stats::HistogramError>(())
//! ```

pub mod error;
pub mod histogram;
pub mod merge;
pub mod options;
pub mod sample;

pub use error::*;
pub use histogram::*;
pub use merge::*;
pub use options::*;
pub use sample::*;
