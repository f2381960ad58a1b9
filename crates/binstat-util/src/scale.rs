//! Evenly spaced points on linear, logarithmic and logit scales

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UtilError, UtilResult};

/// Base used by [`logit`] and [`logit_inv`] unless told otherwise
pub const DEFAULT_LOGIT_BASE: f64 = 10.0;

/// Default number of points for [`linspace_scaled`] callers
pub const DEFAULT_POINTS: usize = 1000;

/// Axis scale along which points are spaced evenly
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Linear,
    Log,
    Logit,
}

impl Scale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Linear => "linear",
            Scale::Log => "log",
            Scale::Logit => "logit",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scale {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Scale::Linear),
            "log" => Ok(Scale::Log),
            "logit" => Ok(Scale::Logit),
            other => Err(UtilError::UnknownScale(other.to_string())),
        }
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = stop;
            points
        }
    }
}

/// `n` points between `vmin` and `vmax` spaced evenly on `scale`
///
/// Log and logit scales need `vmin > 0`; logit also needs `vmax < 1`.
pub fn linspace_scaled(vmin: f64, vmax: f64, n: usize, scale: Scale) -> UtilResult<Vec<f64>> {
    if vmin > vmax {
        return Err(UtilError::precondition("vmin must be <= vmax"));
    }
    if vmin <= 0.0 && matches!(scale, Scale::Log | Scale::Logit) {
        return Err(UtilError::precondition(format!(
            "vmin must be greater than 0 with scale={}",
            scale
        )));
    }
    if vmax >= 1.0 && scale == Scale::Logit {
        return Err(UtilError::precondition(
            "vmax must be less than 1 with scale=logit",
        ));
    }

    let points = match scale {
        Scale::Linear => linspace(vmin, vmax, n),
        Scale::Log => linspace(vmin.log10(), vmax.log10(), n)
            .into_iter()
            .map(|x| 10f64.powf(x))
            .collect(),
        Scale::Logit => linspace(
            logit(vmin, DEFAULT_LOGIT_BASE),
            logit(vmax, DEFAULT_LOGIT_BASE),
            n,
        )
        .into_iter()
        .map(|x| logit_inv(x, DEFAULT_LOGIT_BASE))
        .collect(),
    };

    Ok(points)
}

/// Log-odds of `x` in the given base; NaN outside `(0, 1)`
pub fn logit(x: f64, base: f64) -> f64 {
    (x / (1.0 - x)).log(base)
}

/// Inverse of [`logit`]
pub fn logit_inv(x: f64, base: f64) -> f64 {
    let p = base.powf(x);
    p / (1.0 + p)
}
