//! Configuration for the parameterized statistics
//!
//! Defaults follow the conventional sample statistics: `ddof = 1`, no
//! Sheppard's correction, 10 000 resampled values with uniform in-bin noise.

use serde::{Deserialize, Serialize};

/// Default number of values drawn by the resampler
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Tolerance used when deciding whether all bin widths are equal
///
/// Two widths `a` and `b` are considered equal when
/// `|a - b| <= atol + rtol * |b|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthTolerance {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
}

impl WidthTolerance {
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Check whether `a` is close to the reference value `b`
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

impl Default for WidthTolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
        }
    }
}

/// Options for variance and standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceOptions {
    /// Delta degrees of freedom; the denominator is `n - ddof`
    pub ddof: u32,
    /// Apply Sheppard's correction (requires equal bin widths)
    pub sheppard: bool,
    /// Tolerance for the equal-width check
    pub width_tolerance: WidthTolerance,
}

impl VarianceOptions {
    /// Population variance (`ddof = 0`)
    pub fn population() -> Self {
        Self::default().with_ddof(0)
    }

    /// Set the delta degrees of freedom
    pub fn with_ddof(mut self, ddof: u32) -> Self {
        self.ddof = ddof;
        self
    }

    /// Enable Sheppard's correction
    pub fn with_sheppard(mut self) -> Self {
        self.sheppard = true;
        self
    }

    /// Set the tolerance for the equal-width check
    pub fn with_width_tolerance(mut self, tolerance: WidthTolerance) -> Self {
        self.width_tolerance = tolerance;
        self
    }
}

impl Default for VarianceOptions {
    fn default() -> Self {
        Self {
            ddof: 1,
            sheppard: false,
            width_tolerance: WidthTolerance::default(),
        }
    }
}

/// Options for resampling a histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Number of values to draw
    pub n: usize,
    /// Spread each draw uniformly across its bin instead of using the center
    pub uniform_noise: bool,
    /// Seed for reproducible draws; `None` uses thread-local entropy
    pub seed: Option<u64>,
}

impl SampleOptions {
    /// Set the number of values to draw
    pub fn with_size(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Draw bin centers only
    pub fn without_noise(mut self) -> Self {
        self.uniform_noise = false;
        self
    }

    /// Use a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_SAMPLE_SIZE,
            uniform_noise: true,
            seed: None,
        }
    }
}
