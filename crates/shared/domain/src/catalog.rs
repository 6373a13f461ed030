//! The fixed, in-memory ingredient catalog.
//!
//! The catalog is a `'static` slice, so [`Catalog`] is a `Copy` handle that can be
//! shared freely between requests without synchronization.

use crate::ingredient::{Category, Ingredient};
use std::borrow::Cow;
use strum::IntoEnumIterator;

/// Every ingredient a customer can pick, in display order.
pub static INGREDIENTS: [Ingredient; 10] = [
    Ingredient::new("FLTO", "Flour Tortilla", Category::Wrap),
    Ingredient::new("COTO", "Corn Tortilla", Category::Wrap),
    Ingredient::new("GRBF", "Ground Beef", Category::Protein),
    Ingredient::new("CARN", "Carnitas", Category::Protein),
    Ingredient::new("TMTO", "Diced Tomatoes", Category::Veggies),
    Ingredient::new("LETC", "Lettuce", Category::Veggies),
    Ingredient::new("CHED", "Cheddar", Category::Cheese),
    Ingredient::new("JACK", "Monterrey Jack", Category::Cheese),
    Ingredient::new("SLSA", "Salsa", Category::Sauce),
    Ingredient::new("SRCR", "Sour Cream", Category::Sauce),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown ingredient '{id}'")]
    UnknownIngredient { id: Cow<'static, str> },
}

/// Read-only view over an ingredient list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    ingredients: &'static [Ingredient],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The catalog served by the application.
    #[must_use]
    pub const fn standard() -> Self {
        Self { ingredients: &INGREDIENTS }
    }

    #[must_use]
    pub const fn new(ingredients: &'static [Ingredient]) -> Self {
        Self { ingredients }
    }

    #[must_use]
    pub const fn ingredients(&self) -> &'static [Ingredient] {
        self.ingredients
    }

    /// Lazily yields the ingredients of one category.
    ///
    /// The iterator is recomputed on every call and can be cloned to restart it.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Bucket {
        Bucket { inner: self.ingredients.iter(), category }
    }

    /// Every category in declaration order, paired with its bucket.
    pub fn grouped(&self) -> impl Iterator<Item = (Category, Bucket)> + use<> {
        let catalog = *self;
        Category::iter().map(move |category| (category, catalog.by_category(category)))
    }

    /// Resolves a submitted identifier to its catalog entry.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownIngredient`] when no entry carries `id`.
    pub fn lookup(&self, id: &str) -> Result<&'static Ingredient, CatalogError> {
        self.ingredients
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::UnknownIngredient { id: Cow::Owned(id.to_owned()) })
    }
}

/// The ingredients of a single [`Category`], produced on demand.
#[derive(Debug, Clone)]
pub struct Bucket {
    inner: std::slice::Iter<'static, Ingredient>,
    category: Category,
}

impl Bucket {
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl Iterator for Bucket {
    type Item = &'static Ingredient;

    fn next(&mut self) -> Option<Self::Item> {
        let category = self.category;
        self.inner.find(|i| i.category == category)
    }
}
