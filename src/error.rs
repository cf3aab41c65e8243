// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Image(String),
}

/// Failures of the product listing request.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Connection refused, DNS failure, timeout or broken transfer.
    Network(String),

    /// Server answered with a non-success HTTP status.
    Status(u16),

    /// Body was not a JSON array of products.
    Decode(String),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Network(_) => "notification-catalog-network-error",
            CatalogError::Status(_) => "notification-catalog-status-error",
            CatalogError::Decode(_) => "notification-catalog-decode-error",
        }
    }

    /// Maps a transport error from the HTTP client.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return CatalogError::Status(status.as_u16());
        }
        if err.is_decode() {
            return CatalogError::Decode(err.to_string());
        }
        CatalogError::Network(err.to_string())
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "Network error: {}", msg),
            CatalogError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            CatalogError::Decode(msg) => write!(f, "Malformed product list: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::Status(503).into();
        assert_eq!(
            format!("{}", err),
            "Catalog Error: Unexpected HTTP status: 503"
        );
    }

    #[test]
    fn catalog_error_i18n_keys_are_distinct() {
        let keys = [
            CatalogError::Network("x".into()).i18n_key(),
            CatalogError::Status(500).i18n_key(),
            CatalogError::Decode("x".into()).i18n_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
        assert!(keys.iter().all(|k| k.starts_with("notification-catalog-")));
    }
}
