//! End-to-end conversion.

use std::path::{Path, PathBuf};

use litho_mesh::{cylinder_radius, project, triangulate, Projection};
use litho_relief::{build_relief, ReliefParams};
use litho_types::{Aabb, PixelField, PointGrid, TriangleMesh};
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LithoResult;

/// Everything that controls one conversion.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LithophaneParams {
    /// Heightfield parameters.
    pub relief: ReliefParams,
    /// Flat panel or cylinder.
    pub projection: Projection,
}

/// Statistics from one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct LithophaneStats {
    /// Rows in the final point grid (sealing ring included).
    pub grid_rows: usize,
    /// Columns in the final point grid (sealing ring included).
    pub grid_cols: usize,
    /// Triangles emitted.
    pub triangle_count: usize,
    /// Cylinder radius in mm, for cylindrical projections.
    pub cylinder_radius: Option<f64>,
    /// Bounding box of the mesh.
    pub bounds: Aabb,
}

/// Output of a conversion.
#[derive(Debug, Clone)]
pub struct Lithophane {
    /// Projected point grid the mesh was built from.
    pub grid: PointGrid,
    /// Triangulated shell.
    pub mesh: TriangleMesh,
    /// Conversion statistics.
    pub stats: LithophaneStats,
}

/// Convert decoded pixels into a lithophane mesh.
///
/// Stages run strictly in order (heightfield, projection, triangulation);
/// the first failure aborts the whole request.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the image is entirely
/// black, or any stage would produce an unusable grid.
pub fn generate(pixels: &PixelField, params: &LithophaneParams) -> LithoResult<Lithophane> {
    info!(
        "Generating {} lithophane from {}x{} image",
        params.projection,
        pixels.cols(),
        pixels.rows()
    );

    let flat = build_relief(pixels, &params.relief)?;
    let radius = matches!(params.projection, Projection::Cylindrical(_))
        .then(|| cylinder_radius(&flat));

    let grid = project(flat, &params.projection)?;
    let mesh = triangulate(&grid)?;

    let stats = LithophaneStats {
        grid_rows: grid.rows(),
        grid_cols: grid.cols(),
        triangle_count: mesh.len(),
        cylinder_radius: radius,
        bounds: mesh.bounds(),
    };
    info!(
        "Lithophane mesh: {} triangles from {}x{} grid",
        stats.triangle_count, stats.grid_rows, stats.grid_cols
    );

    Ok(Lithophane { grid, mesh, stats })
}

/// Output path next to the image, with an `.stl` extension.
///
/// ```
/// use litho::default_output_path;
/// use std::path::Path;
///
/// assert_eq!(default_output_path("photos/cat.jpg"), Path::new("photos/cat.stl"));
/// ```
#[must_use]
pub fn default_output_path<P: AsRef<Path>>(image_path: P) -> PathBuf {
    image_path.as_ref().with_extension("stl")
}

/// Decode an image, convert it, and write the mesh as STL.
///
/// # Errors
///
/// Returns an error if the image cannot be decoded, conversion fails, or the
/// STL cannot be written. The output path is only replaced once the whole
/// mesh has been written, so a failure never leaves a partial STL behind.
pub fn image_to_stl<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    stl_path: Q,
    params: &LithophaneParams,
    binary: bool,
) -> LithoResult<LithophaneStats> {
    let image_path = image_path.as_ref();
    info!("Generating point cloud from {}", image_path.display());
    let pixels = litho_io::load_image(image_path)?;

    let lithophane = generate(&pixels, params)?;
    litho_io::save_stl(&lithophane.mesh, stl_path, binary)?;
    Ok(lithophane.stats)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use litho_types::ScalarField;

    #[test]
    fn stats_describe_planar_output() {
        let pixels = PixelField::from(ScalarField::filled(3, 3, 0.5));
        let params = LithophaneParams {
            relief: ReliefParams::default().with_resolution(1.0).with_width(3.0),
            projection: Projection::Planar,
        };

        let out = generate(&pixels, &params).unwrap();
        assert_eq!((out.stats.grid_rows, out.stats.grid_cols), (5, 5));
        assert_eq!(out.stats.triangle_count, 2 * 4 * 4 + 2 * 4);
        assert!(out.stats.cylinder_radius.is_none());
    }

    #[test]
    fn cylindrical_reports_radius() {
        let pixels = PixelField::from(ScalarField::filled(2, 20, 1.0));
        let params = LithophaneParams {
            relief: ReliefParams::default().with_resolution(1.0).with_width(20.0),
            projection: Projection::cylindrical(),
        };

        let out = generate(&pixels, &params).unwrap();
        // 22 columns at 1 mm spacing: extent 21 mm.
        let radius = out.stats.cylinder_radius.unwrap();
        assert!((radius - 21.0 / std::f64::consts::TAU).abs() < 1e-12);
    }
}
