// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! Products as the showcase understands them, independent of the wire
//! format used by the product API.

pub mod newtypes;
pub mod product;
pub mod variant;

pub use newtypes::{request_timeout_bounds, RequestTimeout};
pub use product::{format_amount, Product};
pub use variant::Variant;
