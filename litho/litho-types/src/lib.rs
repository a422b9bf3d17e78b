//! Core data types for lithophane generation.
//!
//! - [`PixelField`] - Decoded image samples (RGB, RGBA, or single channel)
//! - [`ScalarField`] - A row-major grid of reals (intensity, height, coordinates)
//! - [`PointGrid`] - Three co-dimensioned scalar fields forming a structured mesh
//! - [`Triangle`] / [`TriangleMesh`] - Independent facets ready for export
//!
//! # Units
//!
//! Coordinates are `f64` millimeters. Fields are indexed `(row, col)` with the
//! origin at the top-left of the source image.
//!
//! # Example
//!
//! ```
//! use litho_types::{PointGrid, ScalarField};
//!
//! let z = ScalarField::filled(3, 4, 0.5);
//! let x = ScalarField::from_fn(3, 4, |_, c| c as f64);
//! let y = ScalarField::from_fn(3, 4, |r, _| r as f64);
//!
//! let grid = PointGrid::new(x, y, z).unwrap();
//! assert_eq!(grid.shape(), (3, 4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod field;
mod grid;
mod mesh;

pub use error::{FieldError, FieldResult};
pub use field::{PixelField, ScalarField};
pub use grid::PointGrid;
pub use mesh::{Aabb, Triangle, TriangleMesh};

pub use nalgebra::{Point3, Vector3};
