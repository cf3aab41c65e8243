// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! Events describe what the user did, what went wrong and how long the
//! network operations took, so a report can explain an empty gallery or a
//! missing image after the fact.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A swatch was clicked.
    SelectVariant { product: String, variant: String },

    /// Carousel moved forward by one slide.
    NextSlide,

    /// Carousel moved back by one slide.
    PreviousSlide,

    /// A pagination bullet was clicked.
    GoToSlide { index: usize },

    /// The product list was requested again after a failure.
    RetryFetch,
}

/// Categories of warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A request failed but the application keeps working.
    NetworkError,
    /// The settings file could not be read or written.
    ConfigurationIssue,
    /// A product has no image for the selected variant.
    MissingImage,
    /// An image could not be decoded.
    UnsupportedFormat,
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The product list could not be fetched.
    NetworkError,
    /// The product list was not valid JSON.
    DecodeError,
    Other,
}

impl ErrorType {
    /// Category of a failed product list request.
    #[must_use]
    pub fn for_catalog(error: &CatalogError) -> Self {
        match error {
            CatalogError::Network(_) | CatalogError::Status(_) => ErrorType::NetworkError,
            CatalogError::Decode(_) => ErrorType::DecodeError,
        }
    }
}

/// A warning with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Timed network operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// Product list fetch.
    FetchCatalog {
        duration_ms: u64,
        product_count: usize,
        success: bool,
    },
    /// Single image download and decode.
    LoadImage { duration_ms: u64, success: bool },
}

/// Payload of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
    Operation { operation: AppOperation },
}

/// An event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
