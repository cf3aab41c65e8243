// SPDX-License-Identifier: MPL-2.0
//! Selected variant per product.
//!
//! Transitions are copy-and-replace: [`SelectionState::with_selection`]
//! returns a new state and leaves the receiver untouched, so a previous state
//! can be kept and compared.

use crate::domain::catalog::{Product, Variant};
use std::collections::HashMap;

/// Maps product name to the variant whose image is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashMap<String, Variant>,
}

impl SelectionState {
    /// Starts every product on the default (yellow) variant.
    #[must_use]
    pub fn for_products(products: &[Product]) -> Self {
        Self {
            selected: products
                .iter()
                .map(|product| (product.name.clone(), Variant::default()))
                .collect(),
        }
    }

    /// Returns a copy with `name` set to `variant`.
    ///
    /// Other entries are unchanged. Unknown names are inserted and any tag is
    /// accepted.
    #[must_use]
    pub fn with_selection(&self, name: &str, variant: Variant) -> Self {
        let mut selected = self.selected.clone();
        selected.insert(name.to_string(), variant);
        Self { selected }
    }

    #[must_use]
    pub fn selected(&self, name: &str) -> Option<&Variant> {
        self.selected.get(name)
    }

    /// Variant to render for `name`, falling back to the default variant.
    #[must_use]
    pub fn variant_for(&self, name: &str) -> Variant {
        self.selected(name).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.selected
            .iter()
            .map(|(name, variant)| (name.as_str(), variant))
    }
}
