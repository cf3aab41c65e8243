// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog types ([`Product`](catalog::Product), [`Variant`](catalog::Variant),
//!   [`RequestTimeout`](catalog::RequestTimeout))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`rating`]: Star rating derivation ([`StarRating`](rating::StarRating))
//! - [`ui`]: UI value objects ([`SlidesPerView`](ui::SlidesPerView))

pub mod catalog;
pub mod diagnostics;
pub mod rating;
pub mod ui;
