//! Relief parameters.

use image::imageops::FilterType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, ReliefResult};

/// Default spatial resolution: millimeters per sample.
pub const DEFAULT_RESOLUTION_MM: f64 = 0.1;

/// Smooth filters available for resampling.
///
/// Nearest-neighbour is not offered: it aliases and leaves stair steps in
/// the relief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ResampleFilter {
    /// Linear (tent) filter.
    #[default]
    Triangle,
    /// Cubic Catmull-Rom filter.
    CatmullRom,
    /// Gaussian filter.
    Gaussian,
    /// Lanczos filter with window 3.
    Lanczos3,
}

impl ResampleFilter {
    pub(crate) const fn filter_type(self) -> FilterType {
        match self {
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Triangle => write!(f, "triangle"),
            Self::CatmullRom => write!(f, "catmull-rom"),
            Self::Gaussian => write!(f, "gaussian"),
            Self::Lanczos3 => write!(f, "lanczos3"),
        }
    }
}

/// Parameters controlling how an image becomes a heightfield.
///
/// All lengths are millimeters.
///
/// # Example
///
/// ```
/// use litho_relief::ReliefParams;
///
/// let params = ReliefParams::default()
///     .with_width(100.0)
///     .with_depth(2.5)
///     .with_frame(3.0);
///
/// assert!(params.validate().is_ok());
/// assert_eq!(params.frame_samples(), 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReliefParams {
    /// Length covered by one sample.
    pub resolution_mm: f64,
    /// Physical width of the relief. `None` uses the image's pixel column
    /// count as the width in millimeters.
    pub width_mm: Option<f64>,
    /// Maximum relief thickness added on top of the base.
    pub depth_mm: f64,
    /// Minimum base thickness everywhere.
    pub offset_mm: f64,
    /// Width of the solid full-thickness frame. Zero disables the frame.
    pub frame_mm: f64,
    /// Filter used when resampling to the target width.
    pub filter: ResampleFilter,
}

impl Default for ReliefParams {
    fn default() -> Self {
        Self {
            resolution_mm: DEFAULT_RESOLUTION_MM,
            width_mm: None,
            depth_mm: 3.0,
            offset_mm: 0.5,
            frame_mm: 0.0,
            filter: ResampleFilter::default(),
        }
    }
}

impl ReliefParams {
    /// Set the target physical width.
    #[must_use]
    pub const fn with_width(mut self, width_mm: f64) -> Self {
        self.width_mm = Some(width_mm);
        self
    }

    /// Set the maximum relief thickness.
    #[must_use]
    pub const fn with_depth(mut self, depth_mm: f64) -> Self {
        self.depth_mm = depth_mm;
        self
    }

    /// Set the minimum base thickness.
    #[must_use]
    pub const fn with_offset(mut self, offset_mm: f64) -> Self {
        self.offset_mm = offset_mm;
        self
    }

    /// Set the frame width.
    #[must_use]
    pub const fn with_frame(mut self, frame_mm: f64) -> Self {
        self.frame_mm = frame_mm;
        self
    }

    /// Set the spatial resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution_mm: f64) -> Self {
        self.resolution_mm = resolution_mm;
        self
    }

    /// Set the resampling filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Full thickness of the relief, `depth + offset`. This is also the
    /// thickness of the frame.
    #[must_use]
    pub fn full_thickness(&self) -> f64 {
        self.depth_mm + self.offset_mm
    }

    /// Frame width in samples, `round(frame / resolution)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame_samples(&self) -> usize {
        if self.frame_mm > 0.0 {
            // Non-negative and validated finite before use
            (self.frame_mm / self.resolution_mm).round() as usize
        } else {
            0
        }
    }

    /// Check every parameter for range and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`ReliefError::InvalidParameter`] naming the first bad value.
    pub fn validate(&self) -> ReliefResult<()> {
        check_positive("resolution_mm", self.resolution_mm)?;
        if let Some(width) = self.width_mm {
            check_positive("width_mm", width)?;
        }
        check_non_negative("depth_mm", self.depth_mm)?;
        check_positive("offset_mm", self.offset_mm)?;
        check_non_negative("frame_mm", self.frame_mm)?;
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> ReliefResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ReliefError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> ReliefResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ReliefError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let params = ReliefParams::default();
        assert_relative_eq!(params.resolution_mm, 0.1);
        assert_relative_eq!(params.depth_mm, 3.0);
        assert_relative_eq!(params.offset_mm, 0.5);
        assert_relative_eq!(params.frame_mm, 0.0);
        assert!(params.width_mm.is_none());
        assert_eq!(params.filter, ResampleFilter::Triangle);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_chaining() {
        let params = ReliefParams::default()
            .with_width(40.0)
            .with_depth(2.0)
            .with_offset(0.8)
            .with_frame(1.0)
            .with_resolution(0.2)
            .with_filter(ResampleFilter::Lanczos3);

        assert_eq!(params.width_mm, Some(40.0));
        assert_relative_eq!(params.full_thickness(), 2.8);
        assert_eq!(params.frame_samples(), 5);
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn test_frame_samples_rounds() {
        assert_eq!(ReliefParams::default().with_frame(0.26).frame_samples(), 3);
        assert_eq!(ReliefParams::default().with_frame(0.04).frame_samples(), 0);
        assert_eq!(ReliefParams::default().frame_samples(), 0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad = [
            ReliefParams::default().with_offset(0.0),
            ReliefParams::default().with_offset(-0.5),
            ReliefParams::default().with_resolution(0.0),
            ReliefParams::default().with_width(f64::NAN),
            ReliefParams::default().with_depth(-1.0),
            ReliefParams::default().with_frame(f64::INFINITY),
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(ReliefError::InvalidParameter { .. })),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        assert!(ReliefParams::default().with_depth(0.0).validate().is_ok());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(ResampleFilter::CatmullRom.to_string(), "catmull-rom");
        assert_eq!(ResampleFilter::Gaussian.filter_type(), FilterType::Gaussian);
    }

    #[cfg(feature = "clap")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_filter_value_names_match_display() {
        use clap::ValueEnum;

        for filter in ResampleFilter::value_variants() {
            let value = filter.to_possible_value().unwrap();
            assert_eq!(value.get_name(), filter.to_string());
            assert_eq!(ResampleFilter::from_str(value.get_name(), false).unwrap(), *filter);
        }
    }
}
