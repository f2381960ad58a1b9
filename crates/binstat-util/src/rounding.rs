//! Rounding integers to multiples

use crate::error::{UtilError, UtilResult};

/// Remainder with the sign of `multiple`
fn floor_mod(x: i64, multiple: i64) -> i64 {
    ((x % multiple) + multiple) % multiple
}

/// Round `x` up to a multiple of `multiple`
pub fn int_ceil(x: i64, multiple: i64) -> UtilResult<i64> {
    if multiple == 0 {
        return Err(UtilError::ZeroMultiple);
    }
    let rem = floor_mod(x, multiple);
    let bump = if rem > 0 { multiple } else { 0 };
    Ok(x + bump - rem)
}

/// Round `x` down to a multiple of `multiple`
pub fn int_floor(x: i64, multiple: i64) -> UtilResult<i64> {
    if multiple == 0 {
        return Err(UtilError::ZeroMultiple);
    }
    Ok(x - floor_mod(x, multiple))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 8, 16)]
    #[case(16, 8, 16)]
    #[case(0, 8, 0)]
    #[case(-3, 8, 0)]
    #[case(-9, 8, -8)]
    fn test_int_ceil(#[case] x: i64, #[case] multiple: i64, #[case] expected: i64) {
        assert_eq!(int_ceil(x, multiple).unwrap(), expected);
    }

    #[rstest]
    #[case(10, 8, 8)]
    #[case(16, 8, 16)]
    #[case(-3, 8, -8)]
    #[case(7, 8, 0)]
    fn test_int_floor(#[case] x: i64, #[case] multiple: i64, #[case] expected: i64) {
        assert_eq!(int_floor(x, multiple).unwrap(), expected);
    }

    #[test]
    fn test_zero_multiple() {
        assert!(matches!(int_ceil(5, 0), Err(UtilError::ZeroMultiple)));
        assert!(matches!(int_floor(5, 0), Err(UtilError::ZeroMultiple)));
    }
}
