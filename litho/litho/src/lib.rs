//! Raster images to printable lithophane meshes.
//!
//! A lithophane is a thin relief whose thickness varies with image
//! brightness, so that backlighting reveals the picture: dark pixels become
//! thick, bright pixels thin. This crate ties the pipeline together:
//!
//! 1. [`relief`]: resample, normalize, grayscale, invert, frame, seal
//! 2. [`mesh`]: optional cylindrical wrap, then triangulation
//! 3. [`io`]: image decoding and STL export
//!
//! # Quick Start
//!
//! ```
//! use litho::prelude::*;
//!
//! let pixels = PixelField::from(ScalarField::filled(8, 8, 0.75));
//!
//! let result = LithophaneBuilder::new(&pixels)
//!     .resolution(1.0)
//!     .width(8.0)
//!     .depth(3.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(result.stats.grid_cols, 10);
//! ```
//!
//! # Files
//!
//! ```no_run
//! use litho::{default_output_path, image_to_stl, LithophaneParams};
//!
//! let output = default_output_path("portrait.png");
//! let stats = image_to_stl("portrait.png", &output, &LithophaneParams::default(), true).unwrap();
//! println!("{} triangles", stats.triangle_count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod error;
mod pipeline;

pub use builder::LithophaneBuilder;
pub use error::{LithoError, LithoResult};
pub use pipeline::{
    default_output_path, generate, image_to_stl, Lithophane, LithophaneParams, LithophaneStats,
};

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `PixelField`, `ScalarField`, `PointGrid`, `TriangleMesh`.
pub use litho_types as types;

/// Heightfield construction from pixels.
pub use litho_relief as relief;

/// Cylindrical projection and triangulation.
pub use litho_mesh as mesh;

/// Image decoding and STL export.
pub use litho_io as io;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for lithophane generation.
///
/// ```
/// use litho::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use litho_types::{PixelField, PointGrid, ScalarField, TriangleMesh};

    // Parameters
    pub use litho_mesh::{CylinderParams, Projection};
    pub use litho_relief::{ReliefParams, ResampleFilter};

    // Pipeline
    pub use crate::{
        generate, image_to_stl, LithoError, LithoResult, Lithophane, LithophaneBuilder,
        LithophaneParams, LithophaneStats,
    };
}
