//! Structured grid of 3D points.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::field::ScalarField;
use crate::mesh::Aabb;

/// Three co-dimensioned coordinate fields forming an implicit mesh.
///
/// Cell `(r, c)` is the point `(x[r, c], y[r, c], z[r, c])`. Rows run along
/// the print's height, columns along its width (or angle, once wrapped onto a
/// cylinder). The three fields always share one shape; the constructor is the
/// only way in and it enforces that.
///
/// # Example
///
/// ```
/// use litho_types::{PointGrid, ScalarField};
///
/// let x = ScalarField::from_fn(2, 2, |_, c| c as f64);
/// let y = ScalarField::from_fn(2, 2, |r, _| r as f64);
/// let z = ScalarField::zeros(2, 2);
///
/// let grid = PointGrid::new(x, y, z).unwrap();
/// assert_eq!(grid.shape(), (2, 2));
/// assert_eq!(grid.point(1, 1).x, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointGrid {
    x: ScalarField,
    y: ScalarField,
    z: ScalarField,
}

impl PointGrid {
    /// Combine three coordinate fields.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ShapeMismatch`] if `y` or `z` differ in shape from `x`.
    pub fn new(x: ScalarField, y: ScalarField, z: ScalarField) -> FieldResult<Self> {
        let expected = x.shape();
        for (axis, field) in [("y", &y), ("z", &z)] {
            if field.shape() != expected {
                return Err(FieldError::ShapeMismatch {
                    axis,
                    expected,
                    actual: field.shape(),
                });
            }
        }
        Ok(Self { x, y, z })
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.x.rows()
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.x.cols()
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// The x coordinate field.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> &ScalarField {
        &self.x
    }

    /// The y coordinate field.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> &ScalarField {
        &self.y
    }

    /// The z coordinate field.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> &ScalarField {
        &self.z
    }

    /// Split back into `(x, y, z)`.
    #[must_use]
    pub fn into_parts(self) -> (ScalarField, ScalarField, ScalarField) {
        (self.x, self.y, self.z)
    }

    /// Point at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Point3<f64> {
        Point3::new(self.x[(row, col)], self.y[(row, col)], self.z[(row, col)])
    }

    /// Iterate over all points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.x
            .values()
            .iter()
            .zip(self.y.values())
            .zip(self.z.values())
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
    }

    /// Bounding box of every point in the grid.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.points())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rejects_divergent_shapes() {
        let err = PointGrid::new(
            ScalarField::zeros(2, 3),
            ScalarField::zeros(2, 3),
            ScalarField::zeros(3, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FieldError::ShapeMismatch {
                axis: "z",
                expected: (2, 3),
                actual: (3, 2),
            }
        );

        let err = PointGrid::new(
            ScalarField::zeros(2, 3),
            ScalarField::zeros(1, 3),
            ScalarField::zeros(2, 3),
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { axis: "y", .. }));
    }

    #[test]
    fn points_follow_row_major_order() {
        let grid = PointGrid::new(
            ScalarField::from_fn(2, 2, |_, c| c as f64),
            ScalarField::from_fn(2, 2, |r, _| r as f64),
            ScalarField::filled(2, 2, 5.0),
        )
        .unwrap();

        let pts: Vec<_> = grid.points().collect();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[1], Point3::new(1.0, 0.0, 5.0));
        assert_eq!(pts[2], grid.point(1, 0));

        let bounds = grid.bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 5.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 5.0));
    }
}
