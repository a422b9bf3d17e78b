//! Rescaling a field to a physical width.
//!
//! The field is resized so that its column count covers `width_mm` at the
//! given resolution. Both axes use the same scale factor, so the aspect ratio
//! is preserved. Each channel is resampled independently with a smooth filter
//! from the `image` crate.

// Out-of-range shapes are rejected before any cast back to an integer.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use image::{imageops, ImageBuffer, Luma};
use litho_types::{PixelField, ScalarField};
use tracing::debug;

use crate::error::{ReliefError, ReliefResult};
use crate::params::ResampleFilter;

type PlaneImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Scale factor that maps `cols` samples onto `width_mm`.
#[must_use]
pub fn scale_factor(cols: usize, width_mm: f64, resolution_mm: f64) -> f64 {
    width_mm / resolution_mm / cols as f64
}

/// Shape after resampling a `rows x cols` field to `width_mm`.
///
/// Both dimensions are `round(dim * scale)`.
///
/// # Errors
///
/// Returns [`ReliefError::InvalidDimension`] if the input has no samples or
/// if either output dimension rounds to zero or does not fit in `u32`.
///
/// # Example
///
/// ```
/// use litho_relief::target_shape;
///
/// // 100 mm at 0.1 mm/sample is 1000 columns; height follows.
/// assert_eq!(target_shape(300, 400, 100.0, 0.1).unwrap(), (750, 1000));
/// ```
pub fn target_shape(
    rows: usize,
    cols: usize,
    width_mm: f64,
    resolution_mm: f64,
) -> ReliefResult<(usize, usize)> {
    if rows == 0 || cols == 0 {
        return Err(ReliefError::invalid_dimension(rows, cols, "input field is empty"));
    }

    let scale = scale_factor(cols, width_mm, resolution_mm);
    let new_rows = (rows as f64 * scale).round();
    let new_cols = (cols as f64 * scale).round();

    let limit = f64::from(u32::MAX);
    if !(new_rows >= 1.0 && new_cols >= 1.0 && new_rows <= limit && new_cols <= limit) {
        return Err(ReliefError::invalid_dimension(
            new_rows.max(0.0) as usize,
            new_cols.max(0.0) as usize,
            format!("scale factor {scale} yields an unusable grid"),
        ));
    }

    Ok((new_rows as usize, new_cols as usize))
}

/// Resample `field` so its width spans `width_mm` at `resolution_mm` per sample.
///
/// Fields already at the target shape are returned as-is.
///
/// # Errors
///
/// Returns [`ReliefError::InvalidDimension`] if the target shape is unusable
/// (see [`target_shape`]).
pub fn resample(
    field: &PixelField,
    width_mm: f64,
    resolution_mm: f64,
    filter: ResampleFilter,
) -> ReliefResult<PixelField> {
    let (rows, cols) = field.shape();
    let (new_rows, new_cols) = target_shape(rows, cols, width_mm, resolution_mm)?;

    debug!(
        "Resampling {}x{} -> {}x{} ({} channel(s), filter={})",
        rows,
        cols,
        new_rows,
        new_cols,
        field.channels(),
        filter
    );

    if (new_rows, new_cols) == (rows, cols) {
        return Ok(field.clone());
    }

    let planes = (0..field.channels())
        .filter_map(|c| field.channel(c))
        .map(|plane| resample_plane(&plane, new_rows, new_cols, filter))
        .collect::<ReliefResult<Vec<_>>>()?;

    Ok(PixelField::from_planes(&planes)?)
}

/// Resample one channel.
///
/// `image` clamps `f32` samples to `[0, 1]`, so the plane is brought into
/// that range by its peak and scaled back afterwards.
fn resample_plane(
    plane: &ScalarField,
    rows: usize,
    cols: usize,
    filter: ResampleFilter,
) -> ReliefResult<ScalarField> {
    let peak = plane.max().filter(|p| *p > 0.0 && p.is_finite()).unwrap_or(1.0);

    let buffer: Vec<f32> = plane.values().iter().map(|&v| (v / peak) as f32).collect();
    let image = PlaneImage::from_raw(plane.cols() as u32, plane.rows() as u32, buffer)
        .ok_or_else(|| {
            ReliefError::invalid_dimension(plane.rows(), plane.cols(), "buffer does not fit shape")
        })?;

    let resized = imageops::resize(&image, cols as u32, rows as u32, filter.filter_type());

    let values = resized
        .into_raw()
        .into_iter()
        .map(|v| f64::from(v) * peak)
        .collect();
    Ok(ScalarField::new(rows, cols, values)?)
}
