//! Image preprocessing ahead of text recognition.

use crate::core::DiffResult;
use crate::domain::{ImageInput, PreprocessedImage};
use crate::processors::grayscale::to_unweighted_gray;

/// Normalizes a raw input image for recognition.
///
/// With no input this returns the empty placeholder, a valid non-error
/// outcome that lets callers drive partial states (only one image chosen).
/// Otherwise the image bytes are decoded and converted to unweighted
/// grayscale; the original input is never mutated.
///
/// # Errors
///
/// Returns [`crate::core::OcrDiffError::Decode`] if the bytes cannot be
/// interpreted as an image. A failed decode never degrades to a blank
/// image.
pub fn preprocess(input: Option<&ImageInput>) -> DiffResult<PreprocessedImage> {
    let Some(input) = input else {
        return Ok(PreprocessedImage::empty());
    };

    let decoded = input.decode()?;
    let gray = to_unweighted_gray(&decoded);
    tracing::debug!(
        width = gray.width(),
        height = gray.height(),
        "preprocessed image to grayscale"
    );
    Ok(PreprocessedImage::new(gray))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OcrDiffError;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> ImageInput {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 40) as u8, (y * 40) as u8, 128]);
        }
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        ImageInput::from_bytes(bytes.into_inner())
    }

    #[test]
    fn test_preprocess_none_is_empty_placeholder() {
        let result = preprocess(None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_preprocess_keeps_dimensions() {
        let input = encoded_png(5, 4);
        let result = preprocess(Some(&input)).unwrap();
        assert_eq!(result.dimensions(), Some((5, 4)));
    }

    #[test]
    fn test_preprocess_output_is_gray() {
        let input = encoded_png(3, 3);
        let result = preprocess(Some(&input)).unwrap();
        let rgb = result.image().unwrap().to_rgb8();
        for pixel in rgb.pixels() {
            let [r, g, b] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_preprocess_propagates_decode_failure() {
        let input = ImageInput::from_bytes(b"not an image".to_vec());
        assert!(matches!(
            preprocess(Some(&input)),
            Err(OcrDiffError::Decode(_))
        ));
    }
}
