// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the product API and image hosts.
//!
//! The wire format is a JSON array of products with camelCase fields:
//!
//! ```json
//! [{ "name": "Engagement Ring 1", "price": 101.5,
//!    "popularityScoreOutOf5": "4.5",
//!    "images": { "yellow": "https://…", "rose": "https://…" } }]
//! ```
//!
//! Unknown fields are ignored. The score may be a JSON string or number.

use crate::app::config::PRODUCTS_PATH;
use crate::domain::catalog::{Product, RequestTimeout};
use crate::error::{CatalogError, Error, Result};
use crate::media::{decode_image, ImageData};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Largest image body accepted, in bytes (10 MB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

const USER_AGENT: &str = concat!("ProductShowcase/", env!("CARGO_PKG_VERSION"));

/// Builds the product listing URL, tolerating a trailing slash on the base.
#[must_use]
pub fn products_endpoint(api_base: &str) -> String {
    format!("{}{}", api_base.trim().trim_end_matches('/'), PRODUCTS_PATH)
}

/// Shared HTTP client. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    products_url: String,
}

impl CatalogClient {
    /// Creates a client for the given API base.
    ///
    /// If the TLS backend cannot be initialized the client falls back to
    /// reqwest defaults, without the custom timeout.
    #[must_use]
    pub fn new(api_base: &str, timeout: RequestTimeout) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout.as_duration())
            .build()
            .unwrap_or_else(|err| {
                eprintln!("[catalog] Failed to build HTTP client: {err}");
                reqwest::Client::default()
            });

        Self {
            http,
            products_url: products_endpoint(api_base),
        }
    }

    #[must_use]
    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    /// Fetches and parses the product list.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] when the request cannot complete
    /// - [`CatalogError::Status`] for a non-2xx answer
    /// - [`CatalogError::Decode`] when the body is not a product array
    pub async fn fetch_products(self) -> std::result::Result<Vec<Product>, CatalogError> {
        let response = self
            .http
            .get(&self.products_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| CatalogError::from_transport(&err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| CatalogError::from_transport(&err))?;
        parse_products(&body)
    }

    /// Downloads an image and decodes it on a blocking thread.
    ///
    /// Bodies larger than [`MAX_IMAGE_BYTES`] are rejected, whether announced
    /// by `Content-Length` or discovered while streaming.
    pub async fn fetch_image(self, url: String) -> Result<ImageData> {
        use futures_util::StreamExt;

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| Error::Catalog(CatalogError::from_transport(&err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Catalog(CatalogError::Status(status.as_u16())));
        }
        if response
            .content_length()
            .is_some_and(|len| len > MAX_IMAGE_BYTES)
        {
            return Err(Error::Image("image exceeds size limit".to_string()));
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| Error::Catalog(CatalogError::from_transport(&err)))?;
            if (bytes.len() + chunk.len()) as u64 > MAX_IMAGE_BYTES {
                return Err(Error::Image("image exceeds size limit".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }

        tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .map_err(|err| Error::Image(err.to_string()))?
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProductDto {
    name: String,
    price: f64,
    #[serde(
        rename = "popularityScoreOutOf5",
        default = "unknown_score",
        deserialize_with = "deserialize_score"
    )]
    popularity_score: f64,
    #[serde(default)]
    images: HashMap<String, String>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            name: dto.name,
            price: dto.price,
            popularity_score: dto.popularity_score,
            images: dto.images,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScore {
    Number(f64),
    Text(String),
}

fn unknown_score() -> f64 {
    f64::NAN
}

fn deserialize_score<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawScore>::deserialize(deserializer)? {
        Some(RawScore::Number(value)) => value,
        Some(RawScore::Text(text)) => parse_leading_float(&text),
        None => f64::NAN,
    })
}

/// Parses the longest numeric prefix of `text`, like a lenient float parser:
/// `"4.5"` and `"4.5 stars"` give 4.5, `"abc"` gives `NaN`.
pub(crate) fn parse_leading_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(trimmed.len(), |(index, _)| index);

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parses a product list body.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the body is not a JSON array of
/// products.
pub fn parse_products(body: &[u8]) -> std::result::Result<Vec<Product>, CatalogError> {
    let dtos: Vec<ProductDto> =
        serde_json::from_slice(body).map_err(|err| CatalogError::Decode(err.to_string()))?;
    Ok(dtos.into_iter().map(Product::from).collect())
}
