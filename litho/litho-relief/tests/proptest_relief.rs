//! Property-based tests for the heightfield chain.
//!
//! Run with: cargo test -p litho-relief -- proptest

#![allow(clippy::unwrap_used, clippy::float_cmp, clippy::cast_precision_loss)]

use litho_relief::{build_relief, normalize, resample, ReliefParams, ResampleFilter};
use litho_types::PixelField;
use proptest::prelude::*;

/// Random RGB field with at least one non-zero sample.
fn arb_rgb_field() -> impl Strategy<Value = PixelField> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(0.0..1.0f64, rows * cols * 3).prop_map(move |mut samples| {
            samples[0] = samples[0].max(0.01);
            PixelField::new(rows, cols, 3, samples).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn proptest_normalize_has_unit_max(field in arb_rgb_field()) {
        let n = normalize(&field).unwrap();
        prop_assert_eq!(n.max(), Some(1.0));
        prop_assert!(n.samples().iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn proptest_heightfield_bounds(
        field in arb_rgb_field(),
        depth in 0.0..5.0f64,
        offset in 0.1..2.0f64,
        frame in prop::sample::select(vec![0.0, 1.0, 2.0]),
    ) {
        let params = ReliefParams::default()
            .with_resolution(1.0)
            .with_width(field.cols() as f64)
            .with_depth(depth)
            .with_offset(offset)
            .with_frame(frame);

        let grid = build_relief(&field, &params).unwrap();
        let z = grid.z();
        let (rows, cols) = z.shape();

        for r in 0..rows {
            for c in 0..cols {
                let v = z[(r, c)];
                if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                    prop_assert_eq!(v, 0.0);
                } else {
                    prop_assert!(v >= offset - 1e-12, "z={} below offset {}", v, offset);
                    prop_assert!(v <= depth + offset + 1e-12, "z={} above {}", v, depth + offset);
                }
            }
        }
    }

    #[test]
    fn proptest_x_is_strictly_decreasing(field in arb_rgb_field(), width in 0.5..3.0f64) {
        let params = ReliefParams::default().with_width(width);
        let grid = build_relief(&field, &params).unwrap();
        for r in 0..grid.rows() {
            prop_assert!(grid.x().row(r).windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn proptest_resampled_width_tracks_request(field in arb_rgb_field(), width in 0.5..4.0f64) {
        let out = resample(&field, width, 0.1, ResampleFilter::Triangle);
        // Very flat images can round to zero rows; that must be an error, never an empty field.
        if let Ok(out) = out {
            prop_assert!((out.cols() as f64 - (width / 0.1).round()).abs() <= 1.0);
            prop_assert!(out.rows() > 0);
        }
    }
}
