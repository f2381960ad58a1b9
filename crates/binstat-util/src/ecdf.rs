//! ECDF helpers for raw (unbinned) values

use crate::error::{UtilError, UtilResult};
use crate::scale::{linspace, linspace_scaled, Scale};

/// Step-function ECDF of `values`
///
/// Returns `(x, y)` where `x` is the sorted sample with its first value
/// repeated and `y` runs evenly from 0 to 1, so `(x, y)` plots as a post-step
/// curve starting at zero. With `filter_nan` NaN values are dropped first;
/// otherwise they sort to the end.
pub fn ecdf(values: &[f64], filter_nan: bool) -> UtilResult<(Vec<f64>, Vec<f64>)> {
    let mut sorted: Vec<f64> = if filter_nan {
        values.iter().copied().filter(|v| !v.is_nan()).collect()
    } else {
        values.to_vec()
    };
    sorted.sort_by(f64::total_cmp);

    let first = *sorted.first().ok_or(UtilError::EmptyInput)?;
    let mut x = Vec::with_capacity(sorted.len() + 1);
    x.push(first);
    x.extend_from_slice(&sorted);

    let y = linspace(0.0, 1.0, sorted.len() + 1);
    Ok((x, y))
}

/// Quantiles of `values` at `n` probabilities spaced on `scale`
///
/// Probabilities come from [`linspace_scaled`]`(vmin, vmax, n, scale)`;
/// quantiles ignore NaN and interpolate linearly. Returns
/// `(quantiles, probabilities)`; an all-NaN input gives NaN quantiles.
pub fn quantile_ecdf(
    values: &[f64],
    n: usize,
    vmin: f64,
    vmax: f64,
    scale: Scale,
) -> UtilResult<(Vec<f64>, Vec<f64>)> {
    let probabilities = linspace_scaled(vmin, vmax, n, scale)?;
    let quantiles = nan_quantiles(values, &probabilities)?;
    Ok((quantiles, probabilities))
}

/// Linear-interpolation quantiles ignoring NaN values
pub fn nan_quantiles(values: &[f64], qs: &[f64]) -> UtilResult<Vec<f64>> {
    if let Some(q) = qs.iter().find(|q| !(0.0..=1.0).contains(*q)) {
        return Err(UtilError::precondition(format!(
            "quantiles must be in range [0, 1], got {}",
            q
        )));
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return Ok(vec![f64::NAN; qs.len()]);
    }
    sorted.sort_by(f64::total_cmp);

    let last = sorted.len() - 1;
    let quantiles = qs
        .iter()
        .map(|&q| {
            let virt = q * last as f64;
            let lo = (virt.floor() as usize).min(last);
            let hi = (lo + 1).min(last);
            sorted[lo] + (virt - lo as f64) * (sorted[hi] - sorted[lo])
        })
        .collect();
    Ok(quantiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecdf_basic() {
        let (x, y) = ecdf(&[3.0, 1.0, 2.0], true).unwrap();
        assert_eq!(x, vec![1.0, 1.0, 2.0, 3.0]);
        assert_eq!(y.len(), 4);
        assert_eq!(y[0], 0.0);
        assert_eq!(y[3], 1.0);
    }

    #[test]
    fn test_ecdf_filters_nan() {
        let (x, _) = ecdf(&[f64::NAN, 2.0, 1.0], true).unwrap();
        assert_eq!(x, vec![1.0, 1.0, 2.0]);

        let (x, _) = ecdf(&[f64::NAN, 2.0], false).unwrap();
        assert_eq!(x.len(), 3);
        assert!(x[2].is_nan());
    }

    #[test]
    fn test_ecdf_empty() {
        assert!(matches!(ecdf(&[], true), Err(UtilError::EmptyInput)));
        assert!(matches!(ecdf(&[f64::NAN], true), Err(UtilError::EmptyInput)));
    }

    #[test]
    fn test_nan_quantiles() {
        let q = nan_quantiles(&[4.0, f64::NAN, 1.0, 2.0, 3.0], &[0.0, 0.5, 1.0]).unwrap();
        assert_eq!(q, vec![1.0, 2.5, 4.0]);

        let all_nan = nan_quantiles(&[f64::NAN], &[0.5]).unwrap();
        assert!(all_nan[0].is_nan());

        assert!(nan_quantiles(&[1.0], &[1.5]).is_err());
    }

    #[test]
    fn test_quantile_ecdf() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        let (quantiles, probs) = quantile_ecdf(&values, 5, 0.0, 1.0, Scale::Linear).unwrap();
        assert_eq!(probs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(quantiles, vec![0.0, 25.0, 50.0, 75.0, 100.0]);

        assert!(quantile_ecdf(&values, 5, 0.0, 1.0, Scale::Log).is_err());
    }
}
