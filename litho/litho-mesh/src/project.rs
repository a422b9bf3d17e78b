//! Mapping the flat grid onto its final surface.

#![allow(clippy::cast_precision_loss)]

use std::f64::consts::TAU;

use litho_types::{PointGrid, ScalarField};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Columns subtracted from the grid width in the cylindrical angle formula.
///
/// The angle for column `c` is `c / (cols - 10) * 2π`, so the last columns
/// run past a full turn and overlap the seam.
pub const CYLINDER_SEAM_FUDGE: usize = 10;

/// Parameters for wrapping a grid around a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CylinderParams {
    /// Columns subtracted from the grid width when computing the angle step.
    pub seam_fudge: usize,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            seam_fudge: CYLINDER_SEAM_FUDGE,
        }
    }
}

/// How the flat relief is placed in space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Projection {
    /// Flat panel; z is height above the base plane.
    #[default]
    Planar,
    /// Relief wrapped around a tube whose circumference is the grid width.
    Cylindrical(CylinderParams),
}

impl Projection {
    /// Cylindrical projection with the default seam fudge.
    #[must_use]
    pub fn cylindrical() -> Self {
        Self::Cylindrical(CylinderParams::default())
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planar => write!(f, "planar"),
            Self::Cylindrical(_) => write!(f, "cylindrical"),
        }
    }
}

/// Apply `projection` to a flat grid.
///
/// # Errors
///
/// See [`wrap_cylinder`]; the planar projection never fails.
pub fn project(grid: PointGrid, projection: &Projection) -> MeshResult<PointGrid> {
    match projection {
        Projection::Planar => Ok(grid),
        Projection::Cylindrical(params) => wrap_cylinder(&grid, params),
    }
}

/// Radius of the cylinder whose circumference equals the x extent of `grid`.
#[must_use]
pub fn cylinder_radius(grid: &PointGrid) -> f64 {
    let x = grid.x();
    match (x.max(), x.min()) {
        (Some(max), Some(min)) => (max - min) / TAU,
        _ => 0.0,
    }
}

/// Wrap a flat grid around a cylinder.
///
/// Column `c` sits at angle `t = c / (cols - seam_fudge) * 2π`. Each point is
/// pushed out to `radius + z`, giving `x' = (radius + z) cos t` and
/// `z' = (radius + z) sin t`; y is unchanged.
///
/// # Errors
///
/// Returns [`MeshError::InvalidDimension`] if `cols <= seam_fudge`, where the
/// angle step would be undefined or negative.
///
/// # Example
///
/// ```
/// use litho_mesh::{cylinder_radius, wrap_cylinder, CylinderParams};
/// use litho_types::{PointGrid, ScalarField};
///
/// let x = ScalarField::from_fn(2, 20, |_, c| 19.0 - c as f64);
/// let y = ScalarField::from_fn(2, 20, |r, _| r as f64);
/// let flat = PointGrid::new(x, y, ScalarField::zeros(2, 20)).unwrap();
///
/// let radius = cylinder_radius(&flat);
/// let tube = wrap_cylinder(&flat, &CylinderParams::default()).unwrap();
///
/// let p = tube.point(1, 7);
/// assert!(((p.x * p.x + p.z * p.z).sqrt() - radius).abs() < 1e-9);
/// ```
pub fn wrap_cylinder(grid: &PointGrid, params: &CylinderParams) -> MeshResult<PointGrid> {
    let (rows, cols) = grid.shape();
    if cols <= params.seam_fudge {
        return Err(MeshError::invalid_dimension(
            rows,
            cols,
            format!("more than {} columns to wrap a cylinder", params.seam_fudge),
        ));
    }

    let radius = cylinder_radius(grid);
    info!("Cylinder radius {:.3}mm", radius);

    let step = TAU / (cols - params.seam_fudge) as f64;
    debug!(
        "Wrapping {}x{} grid, {:.6} rad per column (last column at {:.4} rad)",
        rows,
        cols,
        step,
        (cols - 1) as f64 * step
    );

    let z = grid.z();
    let effective = |r: usize, c: usize| radius + z[(r, c)];
    let angle = |c: usize| (c as f64 / (cols - params.seam_fudge) as f64) * TAU;

    let x = ScalarField::from_fn(rows, cols, |r, c| effective(r, c) * angle(c).cos());
    let new_z = ScalarField::from_fn(rows, cols, |r, c| effective(r, c) * angle(c).sin());

    Ok(PointGrid::new(x, grid.y().clone(), new_z)?)
}
