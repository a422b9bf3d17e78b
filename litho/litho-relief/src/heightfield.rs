//! Heightfield construction.
//!
//! Each step is a pure transform that returns a new field:
//!
//! 1. [`normalize`] divides by the field maximum
//! 2. [`to_intensity`](crate::to_intensity) collapses colour to one channel
//! 3. [`invert`] makes bright pixels thin
//! 4. [`depth_map`] maps `[0, 1]` onto `[offset, depth + offset]`
//! 5. [`add_frame`] surrounds the relief with a full-thickness border
//! 6. [`seal_border`] adds the one-sample zero ring the back face closes against
//!
//! [`coordinate_grid`] then attaches mirrored x and y coordinates, and
//! [`build_relief`] runs the whole chain, resampling included.

#![allow(clippy::cast_precision_loss)]

use litho_types::{PixelField, PointGrid, ScalarField};
use tracing::{debug, info, warn};

use crate::error::{ReliefError, ReliefResult};
use crate::intensity::to_intensity;
use crate::params::ReliefParams;
use crate::resample::resample;

/// Divide every sample by the field maximum so values span exactly `[0, 1]`.
///
/// # Errors
///
/// Returns [`ReliefError::DegenerateInput`] if the maximum is zero, negative,
/// or not finite, and [`ReliefError::InvalidDimension`] for an empty field.
pub fn normalize(field: &PixelField) -> ReliefResult<PixelField> {
    let (rows, cols) = field.shape();
    let max = field
        .max()
        .ok_or_else(|| ReliefError::invalid_dimension(rows, cols, "cannot normalize an empty field"))?;

    if !(max.is_finite() && max > 0.0) {
        return Err(ReliefError::degenerate(format!(
            "field maximum is {max}; normalization is undefined"
        )));
    }

    Ok(field.map(|v| v / max))
}

/// `v' = 1 - v`.
#[must_use]
pub fn invert(field: &ScalarField) -> ScalarField {
    field.map(|v| 1.0 - v)
}

/// `z = v * depth + offset`.
#[must_use]
pub fn depth_map(field: &ScalarField, depth_mm: f64, offset_mm: f64) -> ScalarField {
    field.map(|v| v.mul_add(depth_mm, offset_mm))
}

/// Surround `field` with `samples` cells of constant `thickness`.
///
/// Zero samples returns a copy.
#[must_use]
pub fn add_frame(field: &ScalarField, samples: usize, thickness: f64) -> ScalarField {
    field.padded(samples, thickness)
}

/// Surround `field` with a one-sample ring of zero height.
#[must_use]
pub fn seal_border(field: &ScalarField) -> ScalarField {
    field.padded(1, 0.0)
}

/// Evenly spaced axis positions `resolution, 2 * resolution, ..., n * resolution`.
#[must_use]
pub fn axis_coordinates(n: usize, resolution_mm: f64) -> Vec<f64> {
    (1..=n).map(|i| i as f64 * resolution_mm).collect()
}

/// Attach x and y coordinate fields to a height field.
///
/// Columns map to x and rows to y, each at `resolution_mm` spacing. The x
/// field is mirrored left-right so the finished solid faces the viewer.
///
/// # Errors
///
/// Returns [`ReliefError::MalformedField`] if the assembled fields disagree
/// in shape.
pub fn coordinate_grid(z: ScalarField, resolution_mm: f64) -> ReliefResult<PointGrid> {
    let (rows, cols) = z.shape();
    let xs = axis_coordinates(cols, resolution_mm);
    let ys = axis_coordinates(rows, resolution_mm);

    let x = ScalarField::from_fn(rows, cols, |_, c| xs[c]).mirrored();
    let y = ScalarField::from_fn(rows, cols, |r, _| ys[r]);

    Ok(PointGrid::new(x, y, z)?)
}

/// Shape of a `rows x cols` field after a frame of `frame_samples` and the
/// sealing ring.
///
/// # Errors
///
/// Returns [`ReliefError::InvalidDimension`] if either side would exceed
/// `u32::MAX` or the grid would not fit in memory addressing.
pub fn sealed_shape(
    rows: usize,
    cols: usize,
    frame_samples: usize,
) -> ReliefResult<(usize, usize)> {
    let side_limit = usize::try_from(u32::MAX).unwrap_or(usize::MAX);
    let byte_limit = isize::MAX.unsigned_abs();

    let shape = frame_samples
        .checked_add(1)
        .and_then(|margin| margin.checked_mul(2))
        .and_then(|grow| Some((rows.checked_add(grow)?, cols.checked_add(grow)?)))
        .filter(|&(r, c)| r <= side_limit && c <= side_limit)
        .filter(|&(r, c)| {
            r.checked_mul(c)
                .and_then(|cells| cells.checked_mul(std::mem::size_of::<f64>()))
                .is_some_and(|bytes| bytes <= byte_limit)
        });

    shape.ok_or_else(|| {
        ReliefError::invalid_dimension(
            rows,
            cols,
            format!("a frame of {frame_samples} samples makes the grid too large"),
        )
    })
}

/// Run the complete pixel-to-point-grid chain.
///
/// Resamples to the target width (the image's column count in millimeters
/// when none is set), then applies every heightfield step and attaches
/// coordinates. The returned grid is flat: z is thickness above the base.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the resampled grid would
/// be empty, or the image is entirely black.
///
/// # Example
///
/// ```
/// use litho_relief::{build_relief, ReliefParams};
/// use litho_types::{PixelField, ScalarField};
///
/// let pixels = PixelField::from(ScalarField::filled(4, 4, 1.0));
/// let params = ReliefParams::default().with_resolution(1.0).with_width(4.0);
///
/// let grid = build_relief(&pixels, &params).unwrap();
/// assert_eq!(grid.shape(), (6, 6));
/// assert!((grid.z()[(2, 2)] - 0.5).abs() < 1e-12);
/// assert_eq!(grid.z()[(0, 0)], 0.0);
/// ```
pub fn build_relief(pixels: &PixelField, params: &ReliefParams) -> ReliefResult<PointGrid> {
    params.validate()?;

    let width_mm = params.width_mm.unwrap_or(pixels.cols() as f64);
    info!(
        "Building relief: width={:.2}mm, depth={:.2}mm, offset={:.2}mm, frame={:.2}mm, resolution={}mm",
        width_mm, params.depth_mm, params.offset_mm, params.frame_mm, params.resolution_mm
    );

    let scaled = resample(pixels, width_mm, params.resolution_mm, params.filter)?;
    let frame_samples = params.frame_samples();
    let (sealed_rows, sealed_cols) = sealed_shape(scaled.rows(), scaled.cols(), frame_samples)?;

    let normalized = normalize(&scaled)?;
    let intensity = to_intensity(&normalized)?;
    let thickness = depth_map(&invert(&intensity), params.depth_mm, params.offset_mm);

    if params.frame_mm > 0.0 && frame_samples == 0 {
        warn!(
            "Frame of {}mm is below one sample at {}mm resolution; no frame added",
            params.frame_mm, params.resolution_mm
        );
    }
    let framed = add_frame(&thickness, frame_samples, params.full_thickness());
    let sealed = seal_border(&framed);

    debug!(
        "Heightfield {}x{} (frame {} samples, sealed to {}x{})",
        thickness.rows(),
        thickness.cols(),
        frame_samples,
        sealed_rows,
        sealed_cols
    );

    coordinate_grid(sealed, params.resolution_mm)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gray(rows: usize, cols: usize, values: Vec<f64>) -> PixelField {
        PixelField::from(ScalarField::new(rows, cols, values).unwrap())
    }

    #[test]
    fn normalize_scales_to_unit_max() {
        let px = gray(1, 3, vec![0.0, 2.0, 8.0]);
        let n = normalize(&px).unwrap();
        assert_eq!(n.samples(), &[0.0, 0.25, 1.0]);
    }

    #[test]
    fn normalize_rejects_black_image() {
        let px = gray(2, 2, vec![0.0; 4]);
        assert!(matches!(
            normalize(&px),
            Err(ReliefError::DegenerateInput(_))
        ));
    }

    #[test]
    fn invert_and_depth_map() {
        let f = ScalarField::new(1, 3, vec![0.0, 0.5, 1.0]).unwrap();
        let z = depth_map(&invert(&f), 3.0, 0.5);
        assert_relative_eq!(z[(0, 0)], 3.5);
        assert_relative_eq!(z[(0, 1)], 2.0);
        assert_relative_eq!(z[(0, 2)], 0.5);
    }

    #[test]
    fn frame_surrounds_with_full_thickness() {
        let f = ScalarField::filled(2, 3, 1.0);
        let framed = add_frame(&f, 2, 3.5);
        assert_eq!(framed.shape(), (6, 7));
        assert_eq!(framed[(0, 0)], 3.5);
        assert_eq!(framed[(1, 6)], 3.5);
        assert_eq!(framed[(2, 2)], 1.0);
        assert_eq!(framed[(3, 4)], 1.0);
        assert_eq!(framed[(4, 2)], 3.5);

        assert_eq!(add_frame(&f, 0, 3.5), f);
    }

    #[test]
    fn seal_border_adds_zero_ring() {
        let f = ScalarField::filled(2, 2, 1.0);
        let sealed = seal_border(&f);
        assert_eq!(sealed.shape(), (4, 4));
        for c in 0..4 {
            assert_eq!(sealed[(0, c)], 0.0);
            assert_eq!(sealed[(3, c)], 0.0);
        }
        assert_eq!(sealed[(1, 0)], 0.0);
        assert_eq!(sealed[(2, 3)], 0.0);
        assert_eq!(sealed[(1, 1)], 1.0);
    }

    #[test]
    fn coordinates_are_mirrored_in_x() {
        let grid = coordinate_grid(ScalarField::zeros(2, 4), 0.1).unwrap();
        let row = grid.x().row(0);
        assert!(row.windows(2).all(|w| w[0] > w[1]));
        assert_relative_eq!(row[0], 0.4);
        assert_relative_eq!(row[3], 0.1);

        assert_relative_eq!(grid.y()[(0, 3)], 0.1);
        assert_relative_eq!(grid.y()[(1, 0)], 0.2);
    }

    #[test]
    fn bright_corner_is_thinnest() {
        let px = gray(2, 2, vec![1.0, 0.0, 0.0, 0.0]);
        let params = ReliefParams::default()
            .with_resolution(1.0)
            .with_width(2.0)
            .with_depth(3.0)
            .with_offset(0.5);

        let grid = build_relief(&px, &params).unwrap();
        assert_eq!(grid.shape(), (4, 4));
        // Interior starts at (1, 1) because of the sealing ring.
        assert_eq!(grid.z()[(1, 1)], 0.5);
        assert_eq!(grid.z()[(2, 2)], 3.5);
    }

    #[test]
    fn frame_is_applied_before_sealing() {
        let px = gray(2, 2, vec![1.0; 4]);
        let params = ReliefParams::default()
            .with_resolution(1.0)
            .with_width(2.0)
            .with_frame(1.0);

        let grid = build_relief(&px, &params).unwrap();
        assert_eq!(grid.shape(), (6, 6));
        let z = grid.z();
        assert_eq!(z[(0, 0)], 0.0);
        assert_relative_eq!(z[(1, 1)], 3.5);
        assert_relative_eq!(z[(2, 2)], 0.5);
        assert_relative_eq!(z[(4, 4)], 3.5);
    }

    #[test]
    fn oversized_frame_is_rejected() {
        let px = gray(2, 2, vec![1.0; 4]);
        for frame in [1e18, 1e300] {
            let params = ReliefParams::default()
                .with_resolution(1.0)
                .with_width(2.0)
                .with_frame(frame);
            assert!(matches!(
                build_relief(&px, &params),
                Err(ReliefError::InvalidDimension { rows: 2, cols: 2, .. })
            ));
        }
    }

    #[test]
    fn sealed_shape_adds_frame_and_ring() {
        assert_eq!(sealed_shape(2, 3, 0).unwrap(), (4, 5));
        assert_eq!(sealed_shape(2, 3, 2).unwrap(), (8, 9));
        assert!(sealed_shape(2, 3, usize::MAX).is_err());
        assert!(sealed_shape(usize::MAX - 1, 1, 0).is_err());
    }

    #[test]
    fn default_width_uses_column_count() {
        // 3 columns -> 3 mm -> 30 samples at 0.1 mm.
        let px = gray(2, 3, vec![0.2, 0.4, 0.6, 0.8, 1.0, 0.5]);
        let grid = build_relief(&px, &ReliefParams::default()).unwrap();
        assert_eq!(grid.shape(), (22, 32));
    }

    #[test]
    fn invalid_params_fail_before_work() {
        let px = gray(1, 1, vec![1.0]);
        let params = ReliefParams::default().with_offset(0.0);
        assert!(matches!(
            build_relief(&px, &params),
            Err(ReliefError::InvalidParameter { name: "offset_mm", .. })
        ));
    }
}
