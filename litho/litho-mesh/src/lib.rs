//! Projection and triangulation of lithophane point grids.
//!
//! - [`project`] keeps a grid flat ([`Projection::Planar`]) or wraps it around
//!   a cylinder ([`Projection::Cylindrical`])
//! - [`triangulate`] emits the closed triangle shell for a grid
//!
//! # Example
//!
//! ```
//! use litho_mesh::{project, triangulate, Projection};
//! use litho_types::{PointGrid, ScalarField};
//!
//! let grid = PointGrid::new(
//!     ScalarField::from_fn(4, 16, |_, c| 16.0 - c as f64),
//!     ScalarField::from_fn(4, 16, |r, _| r as f64),
//!     ScalarField::filled(4, 16, 1.0),
//! )
//! .unwrap();
//!
//! let tube = project(grid, &Projection::cylindrical()).unwrap();
//! let mesh = triangulate(&tube).unwrap();
//! assert_eq!(mesh.len(), 2 * 3 * 15 + 2 * 15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod project;
mod triangulate;

pub use error::{MeshError, MeshResult};
pub use project::{
    cylinder_radius, project, wrap_cylinder, CylinderParams, Projection, CYLINDER_SEAM_FUDGE,
};
pub use triangulate::{triangle_count, triangulate};
