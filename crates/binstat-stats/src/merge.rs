//! Merging histograms that share a binning
//!
//! These operate on count arrays only. The binning of the inputs is assumed
//! to be consistent and is not checked.

use std::ops::AddAssign;

use crate::error::{HistogramError, HistogramResult};

/// Add `src` into `dst` element-wise, in place, and return `dst`
///
/// `dst` may be longer than `src`; the extra bins are left untouched. Clone
/// `dst` first if the original counts are still needed.
pub fn add_to_histogram<'a, T>(dst: &'a mut [T], src: &[T]) -> HistogramResult<&'a mut [T]>
where
    T: Copy + AddAssign,
{
    if dst.len() < src.len() {
        return Err(HistogramError::SizeMismatch {
            dst: dst.len(),
            src: src.len(),
        });
    }

    accumulate(dst, src);
    Ok(dst)
}

/// Sum count arrays into a new array as long as the longest input
///
/// Returns an empty vector when `hists` is empty.
pub fn sum_histograms<T, H>(hists: &[H]) -> Vec<T>
where
    T: Copy + Default + AddAssign,
    H: AsRef<[T]>,
{
    let len = hists.iter().map(|h| h.as_ref().len()).max().unwrap_or(0);
    let mut total = vec![T::default(); len];
    for hist in hists {
        accumulate(&mut total, hist.as_ref());
    }

    tracing::trace!(histograms = hists.len(), bins = len, "summed histograms");
    total
}

/// Caller guarantees `dst.len() >= src.len()`
fn accumulate<T: Copy + AddAssign>(dst: &mut [T], src: &[T]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}
