// SPDX-License-Identifier: MPL-2.0
//! Image decoding for card pictures (PNG, JPEG, GIF, WebP).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// Longest edge, in pixels, of a decoded card image.
pub const MAX_CARD_IMAGE_EDGE: u32 = 600;

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Builds image data from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes encoded bytes and shrinks the result to fit within
/// [`MAX_CARD_IMAGE_EDGE`] on both sides. Smaller images keep their size.
///
/// Decoding is CPU bound; async callers should run it on a blocking thread.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has no pixels".to_string()));
    }

    let fitted = if width > MAX_CARD_IMAGE_EDGE || height > MAX_CARD_IMAGE_EDGE {
        decoded.thumbnail(MAX_CARD_IMAGE_EDGE, MAX_CARD_IMAGE_EDGE)
    } else {
        decoded
    };

    let (width, height) = fitted.dimensions();
    Ok(ImageData::from_rgba(
        width,
        height,
        fitted.to_rgba8().into_vec(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([212, 175, 55, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .expect("encoding png should succeed");
        out.into_inner()
    }

    #[test]
    fn small_image_keeps_its_size() {
        let data = decode_image(&png_bytes(40, 20)).expect("decode should succeed");
        assert_eq!((data.width, data.height), (40, 20));
    }

    #[test]
    fn large_image_is_fitted_within_bounds() {
        let data = decode_image(&png_bytes(1200, 800)).expect("decode should succeed");
        assert_eq!(data.width, MAX_CARD_IMAGE_EDGE);
        assert_eq!(data.height, 400);
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        match decode_image(b"definitely not an image") {
            Err(Error::Image(_)) => {}
            other => panic!("expected Image error, got {:?}", other.map(|d| d.width)),
        }
    }
}
