//! Property tests for the Stockham engine.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test properties`

use proptest::prelude::*;
use stockham2d::{
    Axis, Complex64, ComputedTwiddles, Fft2d, Fft2dConfig, FftError, Grid, Radix, SizeViolation,
    TwiddleSource, TwiddleStrategy, TwiddleTable, decimate, expand, stockham_autosort,
};

fn grid_strategy(log_size: std::ops::Range<u32>) -> impl Strategy<Value = Grid> {
    log_size.prop_flat_map(|log| {
        let n = 1usize << log;
        prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), n * n).prop_map(
            move |values| {
                let samples = values
                    .into_iter()
                    .map(|(re, im)| Complex64::new(re, im))
                    .collect();
                Grid::from_samples(n, samples).unwrap()
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_round_trip_recovers_input(grid in grid_strategy(0..7), cached in any::<bool>()) {
        let strategy = if cached { TwiddleStrategy::Cached } else { TwiddleStrategy::Computed };
        let fft = Fft2d::new(grid.size(), Fft2dConfig::default().with_strategy(strategy)).unwrap();

        let (spectrum, _) = fft.forward(grid.clone()).unwrap();
        let (restored, _) = fft.inverse(spectrum).unwrap();

        let scale = grid.max_norm().max(1.0);
        let error = restored.max_abs_diff(&grid);
        prop_assert!(error <= 1e-12 * scale, "n={} error={error} scale={scale}", grid.size());
    }

    #[test]
    fn test_strategies_agree_on_transforms(grid in grid_strategy(1..7), columns in any::<bool>()) {
        let axis = if columns { Axis::Columns } else { Axis::Rows };
        let table = TwiddleTable::new(grid.size()).unwrap();

        let (cached, _) = stockham_autosort(grid.clone(), axis, &table, 64).unwrap();
        let (computed, _) = stockham_autosort(grid.clone(), axis, &ComputedTwiddles, 64).unwrap();

        let scale = grid.max_norm().max(1.0) * grid.size() as f64;
        prop_assert!(cached.max_abs_diff(&computed) <= 1e-13 * scale);
    }

    #[test]
    fn test_block_size_is_transparent(grid in grid_strategy(1..6), block_size in 1usize..100) {
        let (reference, _) =
            stockham_autosort(grid.clone(), Axis::Rows, &ComputedTwiddles, 64).unwrap();
        let (blocked, _) =
            stockham_autosort(grid, Axis::Rows, &ComputedTwiddles, block_size).unwrap();
        prop_assert_eq!(reference, blocked);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_twiddles_agree(log_size in 1u32..15, j in 0usize..1 << 14, r in 0usize..4) {
        let n = 1usize << log_size;
        let table = TwiddleTable::new(n).unwrap();

        let mut stride = 1;
        while stride < n {
            let a = table.twiddle(j, r, stride, n, Radix::Factor4);
            let b = ComputedTwiddles.twiddle(j, r, stride, n, Radix::Factor4);
            prop_assert!((a.re - b.re).abs() < 1e-15 && (a.im - b.im).abs() < 1e-15);
            stride *= 2;
        }

        let a = table.twiddle(j, r % 2, 1, n, Radix::Factor2);
        let b = ComputedTwiddles.twiddle(j, r % 2, 1, n, Radix::Factor2);
        prop_assert!((a.re - b.re).abs() < 1e-15 && (a.im - b.im).abs() < 1e-15);
    }

    #[test]
    fn test_expand_is_a_bijection(
        log_stride in 0u32..8,
        radix4 in any::<bool>(),
        log_extra in 0u32..3,
    ) {
        let radix = if radix4 { 4 } else { 2 };
        let stride = 1usize << log_stride;
        let n = (stride * radix) << log_extra;

        let mut seen = vec![false; n];
        for j in 0..n / radix {
            for r in 0..radix {
                let target = expand(j, stride, radix) + r * stride;
                prop_assert!(target < n);
                prop_assert!(!seen[target], "collision at {target}");
                seen[target] = true;
            }
        }
        prop_assert!(seen.into_iter().all(|hit| hit));
    }

    #[test]
    fn test_non_power_of_two_sizes_are_rejected(n in 3usize..64) {
        prop_assume!(!n.is_power_of_two());
        let grid = Grid::from_fn(n, |_, _| Complex64::ONE).unwrap();

        let result = stockham_autosort(grid, Axis::Rows, &ComputedTwiddles, 64);
        prop_assert!(
            matches!(
                result,
                Err(FftError::InvalidTransformSize { reason: SizeViolation::NotPowerOfTwo, .. })
            ),
            "unexpected result for n={}",
            n
        );
        prop_assert!(TwiddleTable::new(n).is_err());
        prop_assert!(Fft2d::new(n, Fft2dConfig::default()).is_err());
    }

    #[test]
    fn test_decimate_rejects_other_lengths(len in 0usize..16) {
        prop_assume!(len != 2 && len != 4);
        let mut v = vec![Complex64::ONE; len];
        prop_assert_eq!(decimate(&mut v), Err(FftError::UnsupportedRadix(len)));
    }
}

#[test]
fn test_size_six_fails_before_any_pass() {
    let grid = Grid::from_fn(6, |row, col| Complex64::new(row as f64, col as f64)).unwrap();
    let err = stockham_autosort(grid, Axis::Columns, &ComputedTwiddles, 64).unwrap_err();
    assert_eq!(
        err,
        FftError::InvalidTransformSize {
            rows: 6,
            columns: 6,
            reason: SizeViolation::NotPowerOfTwo
        }
    );
    assert!(Fft2d::new(6, Fft2dConfig::default()).is_err());
}
