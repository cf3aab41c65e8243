// SPDX-License-Identifier: MPL-2.0
//! `product_showcase` is a desktop product gallery built with the Iced GUI
//! framework.
//!
//! It fetches a product list over HTTP and shows it as a paged carousel of
//! cards with metal variant swatches and star ratings, with Fluent
//! localization, toast notifications and a diagnostics log.

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

pub use error::{CatalogError, Error, Result};
