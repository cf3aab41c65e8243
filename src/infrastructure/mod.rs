// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Wraps external I/O (the product API and image hosts) behind types that
//! speak domain types.
//!
//! # Available Adapters
//!
//! - [`catalog_api`]: HTTP client for product listings and card images

pub mod catalog_api;

pub use catalog_api::{parse_products, products_endpoint, CatalogClient, MAX_IMAGE_BYTES};
