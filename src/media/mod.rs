// SPDX-License-Identifier: MPL-2.0
//! Card image decoding and caching.

pub mod image;
pub mod image_cache;

pub use image::{decode_image, ImageData, MAX_CARD_IMAGE_EDGE};
pub use image_cache::{ImageEntry, RemoteImageCache, DEFAULT_MAX_IMAGES};
