// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI chrome (titles, buttons, notifications) is localized with Fluent.
//! Product data from the API is shown verbatim.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary
//! - Fallback marker when a key is missing

pub mod fluent;

pub use fluent::I18n;
