// SPDX-License-Identifier: MPL-2.0
//! Product records shown in the gallery.

use super::Variant;
use crate::domain::rating::StarRating;
use std::collections::HashMap;

/// A product listed by the catalog API.
///
/// `name` is the unique key joining a product to its selected variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Popularity score out of 5. May be `NaN` when the API sent an
    /// unparsable value.
    pub popularity_score: f64,
    /// Image URL per variant tag.
    pub images: HashMap<String, String>,
}

impl Product {
    /// Returns the image URL for a variant, if the product has one.
    #[must_use]
    pub fn image_for(&self, variant: &Variant) -> Option<&str> {
        self.images.get(variant.tag()).map(String::as_str)
    }

    /// Derives the star rating from the popularity score.
    #[must_use]
    pub fn rating(&self) -> StarRating {
        StarRating::from_score(self.popularity_score)
    }

    /// Price as displayed on the card, e.g. `$120.5 USD`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${} USD", format_amount(self.price))
    }

    /// Offered variants this product has no image for.
    #[must_use]
    pub fn missing_variants(&self) -> Vec<Variant> {
        Variant::OFFERED
            .into_iter()
            .filter(|variant| self.image_for(variant).is_none())
            .collect()
    }
}

/// Formats a number without trailing zeros (`4.5`, `120`, `99.99`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}")
    } else {
        format!("{value}")
    }
}
