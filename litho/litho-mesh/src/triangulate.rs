//! Triangulation of a structured point grid.
//!
//! Two passes, both row-major:
//!
//! - **Surface**: every 2x2 block `(i, j)..(i+1, j+1)` becomes two triangles,
//!   `{(i,j), (i,j+1), (i+1,j)}` and `{(i,j+1), (i+1,j+1), (i+1,j)}`.
//! - **Closure**: the last row is stitched to the first,
//!   `{(bot,j), (0,j+1), (0,j)}` and `{(bot,j), (bot,j+1), (0,j+1)}`.
//!
//! On a planar grid the closure strip joins the two zero-height border rows
//! and forms the flat back. On a cylinder it seals the seam between the
//! first and last rows.

use litho_types::{PointGrid, Triangle, TriangleMesh};
use tracing::debug;

use crate::error::{MeshError, MeshResult};

/// Triangles produced for a `rows x cols` grid:
/// `2 (rows - 1)(cols - 1)` surface plus `2 (cols - 1)` closure.
///
/// ```
/// use litho_mesh::triangle_count;
///
/// assert_eq!(triangle_count(4, 4), 24);
/// assert_eq!(triangle_count(1, 4), 0);
/// ```
#[must_use]
pub const fn triangle_count(rows: usize, cols: usize) -> usize {
    if rows < 2 || cols < 2 {
        return 0;
    }
    2 * (rows - 1) * (cols - 1) + 2 * (cols - 1)
}

/// Triangulate the surface and closure strip of `grid`.
///
/// Every triangle owns copies of its vertices. Output order is deterministic:
/// surface pass first, then closure, each row-major.
///
/// # Errors
///
/// Returns [`MeshError::InvalidDimension`] if the grid has fewer than two
/// rows or columns.
///
/// # Example
///
/// ```
/// use litho_mesh::triangulate;
/// use litho_types::{PointGrid, ScalarField};
///
/// let grid = PointGrid::new(
///     ScalarField::from_fn(3, 3, |_, c| c as f64),
///     ScalarField::from_fn(3, 3, |r, _| r as f64),
///     ScalarField::zeros(3, 3),
/// )
/// .unwrap();
///
/// let mesh = triangulate(&grid).unwrap();
/// assert_eq!(mesh.len(), 2 * 2 * 2 + 2 * 2);
/// ```
pub fn triangulate(grid: &PointGrid) -> MeshResult<TriangleMesh> {
    let (rows, cols) = grid.shape();
    if rows < 2 || cols < 2 {
        return Err(MeshError::invalid_dimension(
            rows,
            cols,
            "at least 2 rows and 2 columns",
        ));
    }

    let mut mesh = TriangleMesh::with_capacity(triangle_count(rows, cols));
    let p = |r: usize, c: usize| grid.point(r, c);

    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            mesh.push(Triangle::new(p(i, j), p(i, j + 1), p(i + 1, j)));
            mesh.push(Triangle::new(p(i, j + 1), p(i + 1, j + 1), p(i + 1, j)));
        }
    }
    let surface = mesh.len();

    let bot = rows - 1;
    for j in 0..cols - 1 {
        mesh.push(Triangle::new(p(bot, j), p(0, j + 1), p(0, j)));
        mesh.push(Triangle::new(p(bot, j), p(bot, j + 1), p(0, j + 1)));
    }

    debug!(
        "Triangulated {}x{} grid: {} surface + {} closure triangles",
        rows,
        cols,
        surface,
        mesh.len() - surface
    );

    Ok(mesh)
}
