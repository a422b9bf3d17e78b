//! Fluent builder API for lithophane generation.
//!
//! # Example
//!
//! ```
//! use litho::LithophaneBuilder;
//! use litho::types::PixelField;
//!
//! let pixels = PixelField::from_rgb(2, 2, &[[0.2, 0.4, 0.6]; 4]).unwrap();
//!
//! let result = LithophaneBuilder::new(&pixels)
//!     .width(2.0)
//!     .depth(3.0)
//!     .offset(0.5)
//!     .build()
//!     .unwrap();
//!
//! assert!(!result.mesh.is_empty());
//! ```

use litho_mesh::{CylinderParams, Projection};
use litho_relief::{ReliefParams, ResampleFilter};
use litho_types::PixelField;

use crate::error::LithoResult;
use crate::pipeline::{generate, Lithophane, LithophaneParams};

/// Fluent builder for converting one image.
///
/// Defaults: 0.1 mm resolution, image-width-in-pixels as millimeters, 3 mm
/// depth, 0.5 mm base, no frame, flat panel.
pub struct LithophaneBuilder<'a> {
    pixels: &'a PixelField,
    params: LithophaneParams,
}

impl<'a> LithophaneBuilder<'a> {
    /// Create a builder for the given pixels.
    #[must_use]
    pub fn new(pixels: &'a PixelField) -> Self {
        Self {
            pixels,
            params: LithophaneParams::default(),
        }
    }

    /// Replace all parameters at once.
    #[must_use]
    pub fn params(mut self, params: LithophaneParams) -> Self {
        self.params = params;
        self
    }

    // =========================================================================
    // Relief
    // =========================================================================

    /// Physical width in mm. Height follows the image aspect ratio.
    #[must_use]
    pub fn width(mut self, width_mm: f64) -> Self {
        self.params.relief.width_mm = Some(width_mm);
        self
    }

    /// Maximum relief thickness in mm.
    #[must_use]
    pub fn depth(mut self, depth_mm: f64) -> Self {
        self.params.relief.depth_mm = depth_mm;
        self
    }

    /// Minimum base thickness in mm.
    #[must_use]
    pub fn offset(mut self, offset_mm: f64) -> Self {
        self.params.relief.offset_mm = offset_mm;
        self
    }

    /// Full-thickness frame width in mm.
    #[must_use]
    pub fn frame(mut self, frame_mm: f64) -> Self {
        self.params.relief.frame_mm = frame_mm;
        self
    }

    /// Spatial resolution in mm per sample.
    #[must_use]
    pub fn resolution(mut self, resolution_mm: f64) -> Self {
        self.params.relief.resolution_mm = resolution_mm;
        self
    }

    /// Resampling filter.
    #[must_use]
    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.params.relief.filter = filter;
        self
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Keep the relief as a flat panel.
    #[must_use]
    pub fn planar(mut self) -> Self {
        self.params.projection = Projection::Planar;
        self
    }

    /// Wrap the relief around a cylinder.
    #[must_use]
    pub fn cylindrical(mut self) -> Self {
        self.params.projection = Projection::cylindrical();
        self
    }

    /// Wrap around a cylinder with a custom seam fudge.
    #[must_use]
    pub fn cylindrical_with(mut self, params: CylinderParams) -> Self {
        self.params.projection = Projection::Cylindrical(params);
        self
    }

    /// Current relief parameters.
    #[must_use]
    pub const fn relief_params(&self) -> &ReliefParams {
        &self.params.relief
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Run the pipeline with the configured parameters.
    ///
    /// # Errors
    ///
    /// See [`generate`].
    pub fn build(self) -> LithoResult<Lithophane> {
        generate(self.pixels, &self.params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use litho_types::ScalarField;

    fn pixels() -> PixelField {
        PixelField::from(ScalarField::filled(4, 4, 1.0))
    }

    #[test]
    fn test_builder_defaults() {
        let px = pixels();
        let builder = LithophaneBuilder::new(&px);
        assert_eq!(builder.params, LithophaneParams::default());
        assert!(builder.relief_params().width_mm.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let px = pixels();
        let builder = LithophaneBuilder::new(&px)
            .width(40.0)
            .depth(2.0)
            .offset(0.6)
            .frame(1.5)
            .resolution(0.2)
            .filter(ResampleFilter::Gaussian)
            .cylindrical();

        let relief = builder.relief_params();
        assert_eq!(relief.width_mm, Some(40.0));
        assert_eq!(relief.depth_mm, 2.0);
        assert_eq!(relief.offset_mm, 0.6);
        assert_eq!(relief.frame_mm, 1.5);
        assert_eq!(relief.resolution_mm, 0.2);
        assert_eq!(relief.filter, ResampleFilter::Gaussian);
        assert_eq!(builder.params.projection, Projection::cylindrical());

        let builder = builder.planar();
        assert_eq!(builder.params.projection, Projection::Planar);
    }

    #[test]
    fn test_build_simple() {
        let px = pixels();
        let result = LithophaneBuilder::new(&px)
            .resolution(1.0)
            .width(4.0)
            .build()
            .unwrap();
        assert_eq!(result.mesh.len(), 2 * 5 * 5 + 2 * 5);
    }

    #[test]
    fn test_custom_seam_fudge() {
        let px = PixelField::from(ScalarField::filled(2, 4, 1.0));
        let result = LithophaneBuilder::new(&px)
            .resolution(1.0)
            .width(4.0)
            .cylindrical_with(CylinderParams { seam_fudge: 0 })
            .build();
        assert!(result.is_ok());

        // 6 columns cannot take the default fudge of 10.
        let result = LithophaneBuilder::new(&px)
            .resolution(1.0)
            .width(4.0)
            .cylindrical()
            .build();
        assert!(result.is_err());
    }
}
