//! Unweighted grayscale conversion for OCR preprocessing.

use image::DynamicImage;

/// Converts an image to unweighted grayscale.
///
/// Every pixel's three color channels are replaced by their arithmetic
/// mean, computed with truncating integer division so the result is
/// deterministic across platforms. The alpha channel, when the source has
/// one, is carried through unchanged. Output dimensions equal input
/// dimensions.
///
/// The conversion is idempotent: pixels whose channels are already equal
/// are unchanged by a second pass.
pub fn to_unweighted_gray(img: &DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        let mut rgba = img.to_rgba8();
        for pixel in rgba.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let avg = channel_mean(r, g, b);
            pixel.0 = [avg, avg, avg, a];
        }
        DynamicImage::ImageRgba8(rgba)
    } else {
        let mut rgb = img.to_rgb8();
        for pixel in rgb.pixels_mut() {
            let [r, g, b] = pixel.0;
            let avg = channel_mean(r, g, b);
            pixel.0 = [avg, avg, avg];
        }
        DynamicImage::ImageRgb8(rgb)
    }
}

/// Truncating arithmetic mean of the three color channels.
fn channel_mean(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}
