//! Turn decoded image pixels into a lithophane heightfield.
//!
//! The pipeline runs strictly forward:
//!
//! 1. **Resample** the pixel field to the requested physical width
//! 2. **Normalize** by the field maximum
//! 3. **Extract intensity** with fixed perceptual weights
//! 4. **Invert and depth-map** so dark pixels become thick
//! 5. **Frame** with a solid full-thickness border (optional)
//! 6. **Seal** with a one-sample zero ring for the back face
//! 7. **Attach coordinates**, mirroring x
//!
//! Every step is a pure function returning a new field, so stages can be
//! tested in isolation. [`build_relief`] runs them all.
//!
//! # Example
//!
//! ```
//! use litho_relief::{build_relief, ReliefParams};
//! use litho_types::PixelField;
//!
//! let pixels = PixelField::from_rgb(2, 2, &[[0.9, 0.9, 0.9]; 4]).unwrap();
//! let params = ReliefParams::default().with_width(1.0);
//!
//! let grid = build_relief(&pixels, &params).unwrap();
//! // 1 mm at 0.1 mm/sample, plus the sealing ring.
//! assert_eq!(grid.shape(), (12, 12));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod heightfield;
mod intensity;
mod params;
mod resample;

pub use error::{ReliefError, ReliefResult};
pub use heightfield::{
    add_frame, axis_coordinates, build_relief, coordinate_grid, depth_map, invert, normalize,
    seal_border, sealed_shape,
};
pub use intensity::{luminance, to_intensity, LUMA_WEIGHTS};
pub use params::{ReliefParams, ResampleFilter, DEFAULT_RESOLUTION_MM};
pub use resample::{resample, scale_factor, target_shape};
