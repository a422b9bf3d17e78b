//! Luminance extraction.

use litho_types::{PixelField, ScalarField};

use crate::error::{ReliefError, ReliefResult};

/// Perceptual weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2989, 0.5870, 0.1140];

/// Weighted sum `0.2989 R + 0.5870 G + 0.1140 B`.
///
/// ```
/// use litho_relief::luminance;
///
/// assert!((luminance(1.0, 0.0, 0.0) - 0.2989).abs() < 1e-12);
/// assert!((luminance(0.0, 0.0, 0.0)).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr * r + wg * g + wb * b
}

/// Collapse a pixel field to one intensity channel.
///
/// Single-channel fields pass through unchanged. Three- and four-channel
/// fields are reduced with [`luminance`]; a fourth (alpha) channel is ignored.
///
/// # Errors
///
/// Returns [`ReliefError::UnsupportedChannels`] for any other channel count.
pub fn to_intensity(field: &PixelField) -> ReliefResult<ScalarField> {
    let (rows, cols) = field.shape();
    let values = match field.channels() {
        1 => field.samples().to_vec(),
        3 | 4 => field
            .pixels()
            .map(|p| luminance(p[0], p[1], p[2]))
            .collect(),
        n => return Err(ReliefError::UnsupportedChannels(n)),
    };
    Ok(ScalarField::new(rows, cols, values)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weights_match_reference() {
        assert_relative_eq!(luminance(0.0, 1.0, 0.0), 0.5870);
        assert_relative_eq!(luminance(0.0, 0.0, 1.0), 0.1140);
        assert_relative_eq!(luminance(1.0, 1.0, 1.0), 0.9999, epsilon = 1e-12);
    }

    #[test]
    fn rgb_field_becomes_scalar() {
        let px = PixelField::from_rgb(1, 2, &[[1.0, 0.0, 0.0], [0.5, 0.5, 0.5]]).unwrap();
        let gray = to_intensity(&px).unwrap();
        assert_eq!(gray.shape(), (1, 2));
        assert_relative_eq!(gray[(0, 0)], 0.2989);
        assert_relative_eq!(gray[(0, 1)], 0.49995, epsilon = 1e-12);
    }

    #[test]
    fn alpha_is_ignored() {
        let px = PixelField::new(1, 1, 4, vec![0.0, 1.0, 0.0, 0.25]).unwrap();
        assert_relative_eq!(to_intensity(&px).unwrap()[(0, 0)], 0.5870);
    }

    #[test]
    fn single_channel_passes_through() {
        let px = PixelField::new(1, 3, 1, vec![0.1, 0.2, 0.3]).unwrap();
        assert_eq!(to_intensity(&px).unwrap().values(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn two_channels_rejected() {
        let px = PixelField::new(1, 1, 2, vec![0.0, 0.0]).unwrap();
        assert_eq!(
            to_intensity(&px).unwrap_err(),
            ReliefError::UnsupportedChannels(2)
        );
    }
}
