// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! # Categories
//!
//! - **Catalog**: Product API location and request timeout
//! - **Window**: Initial window geometry

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Base URL of the product API when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Path of the product listing endpoint, appended to the API base.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Environment variable overriding the API base.
pub const ENV_API_BASE: &str = "PRODUCT_SHOWCASE_API_BASE";

pub use crate::domain::catalog::request_timeout_bounds::{
    DEFAULT_SECS as DEFAULT_REQUEST_TIMEOUT_SECS, MAX_SECS as MAX_REQUEST_TIMEOUT_SECS,
    MIN_SECS as MIN_REQUEST_TIMEOUT_SECS,
};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width. Wide enough for four slides.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Smallest window width, which still fits one card.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Smallest window height.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;
