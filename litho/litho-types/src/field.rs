//! Dense row-major 2D fields.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// A 2D grid of real numbers, stored row-major with the origin at the top-left.
///
/// Used for normalized intensity (values in `[0, 1]`), heights, and the
/// coordinate planes of a [`PointGrid`](crate::PointGrid).
///
/// # Example
///
/// ```
/// use litho_types::ScalarField;
///
/// let field = ScalarField::from_fn(2, 3, |r, c| (r * 3 + c) as f64);
/// assert_eq!(field.shape(), (2, 3));
/// assert_eq!(field[(1, 2)], 5.0);
/// assert_eq!(field.max(), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarField {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ScalarField {
    /// Wrap a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::SampleCount`] if `values.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> FieldResult<Self> {
        let expected = rows * cols;
        if values.len() != expected {
            return Err(FieldError::SampleCount {
                rows,
                cols,
                channels: 1,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { rows, cols, values })
    }

    /// A field with every cell set to `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    /// A field of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Build a field by evaluating `f(row, col)` for every cell in row-major order.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                values.push(f(r, c));
            }
        }
        Self { rows, cols, values }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True if the field has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row-major view of all values.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the field, returning its row-major buffer.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Apply `f` element-wise, returning a new field of the same shape.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Largest value, or `None` for an empty field.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Smallest value, or `None` for an empty field.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Copy of this field with the column order reversed.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self::from_fn(self.rows, self.cols, |r, c| self[(r, self.cols - 1 - c)])
    }

    /// Copy `self` into a larger field filled with `fill`, leaving `margin`
    /// cells of `fill` on every side.
    #[must_use]
    pub fn padded(&self, margin: usize, fill: f64) -> Self {
        let rows = self.rows + 2 * margin;
        let cols = self.cols + 2 * margin;
        let mut out = Self::filled(rows, cols, fill);
        for r in 0..self.rows {
            let dst = (r + margin) * cols + margin;
            out.values[dst..dst + self.cols].copy_from_slice(self.row(r));
        }
        out
    }
}

impl Index<(usize, usize)> for ScalarField {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.values[row * self.cols + col]
    }
}

/// A 2D grid of multi-channel samples (RGB, RGBA, or single-channel),
/// row-major with the origin at the top-left.
///
/// Samples are interleaved: the channels of one pixel are contiguous.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelField {
    rows: usize,
    cols: usize,
    channels: usize,
    samples: Vec<f64>,
}

impl PixelField {
    /// Wrap an interleaved row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ZeroChannels`] if `channels == 0`, or
    /// [`FieldError::SampleCount`] if the buffer length does not match
    /// `rows * cols * channels`.
    pub fn new(rows: usize, cols: usize, channels: usize, samples: Vec<f64>) -> FieldResult<Self> {
        if channels == 0 {
            return Err(FieldError::ZeroChannels);
        }
        let expected = rows * cols * channels;
        if samples.len() != expected {
            return Err(FieldError::SampleCount {
                rows,
                cols,
                channels,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            channels,
            samples,
        })
    }

    /// Wrap a row-major buffer of RGB triples.
    #[must_use]
    pub fn from_rgb(rows: usize, cols: usize, pixels: &[[f64; 3]]) -> Option<Self> {
        (pixels.len() == rows * cols).then(|| Self {
            rows,
            cols,
            channels: 3,
            samples: pixels.iter().flatten().copied().collect(),
        })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Channels per pixel.
    #[inline]
    #[must_use]
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Interleaved sample buffer.
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Channels of the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> &[f64] {
        let start = (row * self.cols + col) * self.channels;
        &self.samples[start..start + self.channels]
    }

    /// Iterate over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[f64]> {
        self.samples.chunks_exact(self.channels)
    }

    /// Extract one channel as a scalar field.
    ///
    /// Returns `None` if `channel >= self.channels()`.
    #[must_use]
    pub fn channel(&self, channel: usize) -> Option<ScalarField> {
        (channel < self.channels).then(|| ScalarField {
            rows: self.rows,
            cols: self.cols,
            values: self.pixels().map(|p| p[channel]).collect(),
        })
    }

    /// Reassemble a pixel field from per-channel planes of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ZeroChannels`] for an empty plane list and
    /// [`FieldError::ShapeMismatch`] if the planes disagree in shape.
    pub fn from_planes(planes: &[ScalarField]) -> FieldResult<Self> {
        let first = planes.first().ok_or(FieldError::ZeroChannels)?;
        let (rows, cols) = first.shape();
        if let Some(bad) = planes.iter().find(|p| p.shape() != (rows, cols)) {
            return Err(FieldError::ShapeMismatch {
                axis: "channel",
                expected: (rows, cols),
                actual: bad.shape(),
            });
        }

        let channels = planes.len();
        let mut samples = Vec::with_capacity(rows * cols * channels);
        for i in 0..rows * cols {
            samples.extend(planes.iter().map(|p| p.values[i]));
        }
        Ok(Self {
            rows,
            cols,
            channels,
            samples,
        })
    }

    /// Apply `f` to every sample, returning a new field of the same shape.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            samples: self.samples.iter().map(|&v| f(v)).collect(),
            ..self.clone()
        }
    }

    /// Largest sample across all channels, or `None` for an empty field.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }
}

impl From<ScalarField> for PixelField {
    fn from(field: ScalarField) -> Self {
        Self {
            rows: field.rows,
            cols: field.cols,
            channels: 1,
            samples: field.values,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn scalar_new_checks_length() {
        assert!(ScalarField::new(2, 2, vec![0.0; 4]).is_ok());
        let err = ScalarField::new(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, FieldError::SampleCount { expected: 4, actual: 3, .. }));
    }

    #[test]
    fn scalar_indexing_is_row_major() {
        let f = ScalarField::new(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(f[(0, 2)], 2.0);
        assert_eq!(f[(1, 0)], 3.0);
        assert_eq!(f.row(1), &[3.0, 4.0, 5.0]);
        assert_eq!(f.get(2, 0), None);
    }

    #[test]
    fn scalar_min_max() {
        let f = ScalarField::from_fn(3, 3, |r, c| r as f64 - c as f64);
        assert_eq!(f.max(), Some(2.0));
        assert_eq!(f.min(), Some(-2.0));
        assert_eq!(ScalarField::zeros(0, 0).max(), None);
    }

    #[test]
    fn mirrored_reverses_columns() {
        let f = ScalarField::from_fn(2, 3, |_, c| c as f64);
        let m = f.mirrored();
        assert_eq!(m.row(0), &[2.0, 1.0, 0.0]);
        assert_eq!(m.row(1), &[2.0, 1.0, 0.0]);
    }

    #[test]
    fn padded_places_field_in_center() {
        let f = ScalarField::filled(2, 2, 7.0);
        let p = f.padded(1, 0.0);
        assert_eq!(p.shape(), (4, 4));
        assert_eq!(p.row(0), &[0.0; 4]);
        assert_eq!(p.row(1), &[0.0, 7.0, 7.0, 0.0]);
        assert_eq!(p.row(2), &[0.0, 7.0, 7.0, 0.0]);
        assert_eq!(p.row(3), &[0.0; 4]);
    }

    #[test]
    fn pixel_field_channels_round_trip() {
        let px = PixelField::from_rgb(1, 2, &[[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]).unwrap();
        assert_eq!(px.pixel(0, 1), &[0.4, 0.5, 0.6]);

        let green = px.channel(1).unwrap();
        assert_eq!(green.values(), &[0.2, 0.5]);
        assert!(px.channel(3).is_none());

        let planes: Vec<_> = (0..3).filter_map(|c| px.channel(c)).collect();
        assert_eq!(PixelField::from_planes(&planes).unwrap(), px);
    }

    #[test]
    fn pixel_field_rejects_bad_buffers() {
        assert_eq!(
            PixelField::new(1, 1, 0, vec![]).unwrap_err(),
            FieldError::ZeroChannels
        );
        assert!(PixelField::new(2, 2, 3, vec![0.0; 11]).is_err());
        assert!(PixelField::from_rgb(2, 2, &[[0.0; 3]; 3]).is_none());
    }

    #[test]
    fn from_planes_rejects_mismatched_shapes() {
        let planes = [ScalarField::zeros(2, 2), ScalarField::zeros(2, 3)];
        assert!(matches!(
            PixelField::from_planes(&planes),
            Err(FieldError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn pixel_max_spans_channels() {
        let px = PixelField::from_rgb(1, 2, &[[0.1, 0.9, 0.3], [0.4, 0.5, 0.6]]).unwrap();
        assert_eq!(px.max(), Some(0.9));
    }
}
