//! Array helper integration tests

use std::collections::{HashMap, HashSet};

use binstat_util::{
    as_hilbert_matrix, ecdf, int_ceil, int_floor, linspace_scaled, netify, quantile_ecdf,
    vectorized_dict_lookup, Scale, UtilError,
};
use ndarray::Array1;
use proptest::prelude::*;

#[test]
fn test_scale_names_roundtrip() {
    for name in ["linear", "log", "logit"] {
        let scale: Scale = name.parse().unwrap();
        assert_eq!(scale.to_string(), name);
    }
    assert!(matches!("cubic".parse::<Scale>(), Err(UtilError::UnknownScale(_))));
}

#[test]
fn test_quantile_ecdf_logit_tails() {
    let values: Vec<f64> = (1..=1000).map(f64::from).collect();
    let (quantiles, probs) = quantile_ecdf(&values, 11, 0.001, 0.999, Scale::Logit).unwrap();
    assert_eq!(quantiles.len(), 11);
    assert!((probs[5] - 0.5).abs() < 1e-9);
    assert!(quantiles.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_hilbert_matrix_of_lookup() {
    let ports: Vec<u16> = (0..16).collect();
    let matrix = as_hilbert_matrix(&ports).unwrap();

    let labels: HashMap<u16, bool> = ports.iter().map(|&p| (p, p % 2 == 0)).collect();
    let even = vectorized_dict_lookup(&labels, &matrix, None).unwrap();
    assert_eq!(even.dim(), (4, 4));
    assert!(even[[0, 0]]);
}

#[test]
fn test_netify_strings_and_values() {
    let parsed = netify("172.16.0.0/12").unwrap();
    assert_eq!(netify(parsed).unwrap(), parsed);
    assert!(netify("172.16.0.1/12").is_err());
}

proptest! {
    #[test]
    fn test_linspace_scaled_monotone(vmin in 0.001f64..0.5, span in 0.0f64..0.49, n in 2usize..200) {
        let vmax = vmin + span;
        for scale in [Scale::Linear, Scale::Log, Scale::Logit] {
            let x = linspace_scaled(vmin, vmax, n, scale).unwrap();
            prop_assert_eq!(x.len(), n);
            prop_assert!(x.windows(2).all(|w| w[0] <= w[1] + 1e-12));
            prop_assert!((x[0] - vmin).abs() < 1e-9);
            prop_assert!((x[n - 1] - vmax).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ecdf_ends_at_one(values in prop::collection::vec(-1e6f64..1e6, 1..100)) {
        let (x, y) = ecdf(&values, true).unwrap();
        prop_assert_eq!(x.len(), values.len() + 1);
        prop_assert!(x.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(y[0], 0.0);
        prop_assert_eq!(y[y.len() - 1], 1.0);
    }

    #[test]
    fn test_hilbert_matrix_is_permutation(level in 1u32..5) {
        let len = 1usize << (2 * level);
        let seq: Vec<usize> = (0..len).collect();
        let matrix = as_hilbert_matrix(&seq).unwrap();
        let seen: HashSet<usize> = matrix.iter().copied().collect();
        prop_assert_eq!(seen.len(), len);
    }

    #[test]
    fn test_int_rounding_brackets(x in -10_000i64..10_000, multiple in 1i64..100) {
        let lo = int_floor(x, multiple).unwrap();
        let hi = int_ceil(x, multiple).unwrap();
        prop_assert!(lo <= x && x <= hi);
        prop_assert_eq!(lo % multiple, 0);
        prop_assert_eq!(hi % multiple, 0);
        prop_assert!(hi - lo == 0 || hi - lo == multiple);
    }
}

#[test]
fn test_lookup_on_1d() {
    let dict = HashMap::from([("a", 1), ("b", 2)]);
    let keys = Array1::from(vec!["b", "a", "b"]);
    let out = vectorized_dict_lookup(&dict, &keys, None).unwrap();
    assert_eq!(out.to_vec(), vec![2, 1, 2]);
}
