//! Image decoding into pixel fields.

use std::path::Path;

use image::DynamicImage;
use litho_types::PixelField;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Decode an image file into a pixel field with samples in `[0, 1]`.
///
/// Grayscale images yield one channel, colour images three, and colour
/// images with alpha four. Format is detected from the file contents.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist and
/// [`IoError::Image`] if decoding fails.
///
/// # Example
///
/// ```no_run
/// use litho_io::load_image;
///
/// let pixels = load_image("portrait.jpg").unwrap();
/// println!("{}x{} with {} channels", pixels.rows(), pixels.cols(), pixels.channels());
/// ```
pub fn load_image<P: AsRef<Path>>(path: P) -> IoResult<PixelField> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    pixel_field_from_image(&decoded)
}

/// Convert an already decoded image into a pixel field.
///
/// # Errors
///
/// Returns [`IoError::MalformedField`] if the decoded buffer is inconsistent
/// with the image dimensions.
pub fn pixel_field_from_image(image: &DynamicImage) -> IoResult<PixelField> {
    let rows = image.height() as usize;
    let cols = image.width() as usize;
    let color = image.color();

    let (channels, raw) = if !color.has_color() {
        (1, image.to_luma32f().into_raw())
    } else if color.has_alpha() {
        (4, image.to_rgba32f().into_raw())
    } else {
        (3, image.to_rgb32f().into_raw())
    };

    debug!("Decoded {}x{} image ({:?}, {} channel(s))", cols, rows, color, channels);

    let samples = raw.into_iter().map(f64::from).collect();
    Ok(PixelField::new(rows, cols, channels, samples)?)
}
