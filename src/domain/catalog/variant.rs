// SPDX-License-Identifier: MPL-2.0
//! Metal color variants offered for every product.

use std::fmt;

/// A product image variant, keyed by its tag in the product `images` map.
///
/// The three metal colors are the variants the gallery offers as swatches.
/// Any other tag is kept verbatim in [`Variant::Custom`] so it can still be
/// stored and looked up; such a lookup usually finds no image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Yellow,
    White,
    Rose,
    Custom(String),
}

impl Variant {
    /// Variants rendered as swatches, in display order.
    pub const OFFERED: [Variant; 3] = [Variant::Yellow, Variant::White, Variant::Rose];

    /// Parses a tag. Known tags are matched case-insensitively after trimming.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "yellow" => Variant::Yellow,
            "white" => Variant::White,
            "rose" => Variant::Rose,
            _ => Variant::Custom(tag.to_string()),
        }
    }

    /// Returns the key used in the product `images` map.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Variant::Yellow => "yellow",
            Variant::White => "white",
            Variant::Rose => "rose",
            Variant::Custom(tag) => tag,
        }
    }

    /// Returns the i18n key of the swatch tooltip ("Yellow Gold", ...).
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Variant::Yellow => "variant-yellow-gold",
            Variant::White => "variant-white-gold",
            Variant::Rose => "variant-rose-gold",
            Variant::Custom(_) => "variant-custom",
        }
    }

    /// Returns true for the three offered metal colors.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        !matches!(self, Variant::Custom(_))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
