//! Lay a 1-D sequence out along a 2-D Hilbert curve
//!
//! Consecutive elements land in neighbouring cells, which keeps ranges such
//! as address blocks visually contiguous in a heatmap.

use ndarray::Array2;

use crate::error::{UtilError, UtilResult};

/// Largest supported curve order
pub const MAX_HILBERT_LEVEL: u32 = 12;

/// Curve order for a sequence of `len` elements, if `len == 4^level`
pub fn hilbert_level(len: usize) -> UtilResult<u32> {
    (1..=MAX_HILBERT_LEVEL)
        .find(|&level| 1usize << (2 * level) == len)
        .ok_or(UtilError::HilbertLength {
            len,
            max_level: MAX_HILBERT_LEVEL,
        })
}

/// `(x, y)` cell of the point at `distance` along a curve of order `level`
///
/// Uses Skilling's transpose form: the distance bits are split across the
/// two axes, Gray-decoded, then the excess rotations are undone. A curve of
/// order 0 is the single cell `(0, 0)`.
pub fn hilbert_point(distance: u64, level: u32) -> (u64, u64) {
    if level == 0 {
        return (0, 0);
    }

    let mut axes = [0u64; 2];
    for bit in 0..level {
        // Interleaved bits, most significant first: x takes the higher of each pair
        axes[0] |= ((distance >> (2 * bit + 1)) & 1) << bit;
        axes[1] |= ((distance >> (2 * bit)) & 1) << bit;
    }

    // Gray decode
    let t = axes[1] >> 1;
    axes[1] ^= axes[0];
    axes[0] ^= t;

    // Undo excess work
    let top = 2u64 << (level - 1);
    let mut q = 2u64;
    while q != top {
        let p = q - 1;
        for i in (0..2).rev() {
            if axes[i] & q != 0 {
                axes[0] ^= p;
            } else {
                let t = (axes[0] ^ axes[i]) & p;
                axes[0] ^= t;
                axes[i] ^= t;
            }
        }
        q <<= 1;
    }

    (axes[0], axes[1])
}

/// Arrange `seq` in a square matrix following a Hilbert curve
///
/// `seq.len()` must be `4^level` for `1 <= level <= 12`. Element `d` lands
/// at row `y`, column `x` where `(x, y) = hilbert_point(d, level)`.
pub fn as_hilbert_matrix<T: Clone>(seq: &[T]) -> UtilResult<Array2<T>> {
    let level = hilbert_level(seq.len())?;
    let side = 1usize << level;

    let mut matrix = Array2::from_shape_vec((side, side), seq.to_vec())?;
    for (d, value) in seq.iter().enumerate() {
        let (x, y) = hilbert_point(d as u64, level);
        matrix[[y as usize, x as usize]] = value.clone();
    }

    tracing::trace!(len = seq.len(), level, "built Hilbert matrix");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_hilbert_level() {
        assert_eq!(hilbert_level(4).unwrap(), 1);
        assert_eq!(hilbert_level(256).unwrap(), 4);
        assert!(hilbert_level(1).is_err());
        assert!(hilbert_level(8).is_err());
        assert!(hilbert_level(1 << 26).is_err());
    }

    #[test]
    fn test_level_zero_is_single_cell() {
        assert_eq!(hilbert_point(0, 0), (0, 0));
        assert_eq!(hilbert_point(3, 0), (0, 0));
    }

    #[test]
    fn test_level_one_points() {
        let points: Vec<_> = (0..4).map(|d| hilbert_point(d, 1)).collect();
        assert_eq!(points, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_level_two_points() {
        let points: Vec<_> = (0..16).map(|d| hilbert_point(d, 2)).collect();
        assert_eq!(
            points,
            vec![
                (0, 0), (1, 0), (1, 1), (0, 1),
                (0, 2), (0, 3), (1, 3), (1, 2),
                (2, 2), (2, 3), (3, 3), (3, 2),
                (3, 1), (2, 1), (2, 0), (3, 0),
            ]
        );
    }

    #[test]
    fn test_curve_is_continuous() {
        for level in 1..=5 {
            let n = 1u64 << (2 * level);
            let points: Vec<_> = (0..n).map(|d| hilbert_point(d, level)).collect();
            for w in points.windows(2) {
                let dx = w[0].0.abs_diff(w[1].0);
                let dy = w[0].1.abs_diff(w[1].1);
                assert_eq!(dx + dy, 1, "level {} jump between {:?}", level, w);
            }
            let mut unique = points.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len() as u64, n);
        }
    }

    #[test]
    fn test_as_hilbert_matrix() {
        let matrix = as_hilbert_matrix(&[0, 1, 2, 3]).unwrap();
        assert_eq!(matrix, array![[0, 3], [1, 2]]);
    }

    #[test]
    fn test_as_hilbert_matrix_bad_length() {
        assert!(matches!(
            as_hilbert_matrix(&[1, 2, 3]),
            Err(UtilError::HilbertLength { len: 3, .. })
        ));
    }
}
