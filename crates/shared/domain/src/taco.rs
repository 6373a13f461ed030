use crate::constants::{INGREDIENTS, MIN_TACO_NAME_LEN, NAME};
use crate::ingredient::Ingredient;
use crate::validation::FieldErrors;
use serde::Serialize;

pub const NAME_TOO_SHORT: &str = "Name must be at least five characters long";
pub const NO_INGREDIENTS: &str = "You must choose at least one ingredient";

/// A named composition of catalog ingredients.
///
/// A `Taco` can only be obtained through [`Taco::new`], so every instance has a
/// name of at least [`MIN_TACO_NAME_LEN`] characters and at least one ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taco {
    name: String,
    ingredients: Vec<&'static Ingredient>,
}

impl Taco {
    /// Validates and assembles a taco.
    ///
    /// # Errors
    /// Returns every violated rule as a [`FieldErrors`] entry keyed by form field.
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<&'static Ingredient>,
    ) -> Result<Self, FieldErrors> {
        let name = name.into();
        let mut errors = FieldErrors::new();

        if name.chars().count() < MIN_TACO_NAME_LEN {
            errors.reject(NAME, NAME_TOO_SHORT);
        }
        if ingredients.is_empty() {
            errors.reject(INGREDIENTS, NO_INGREDIENTS);
        }

        errors.into_result(Self { name, ingredients })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ingredients(&self) -> &[&'static Ingredient] {
        &self.ingredients
    }

    pub fn ingredient_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ingredients.iter().map(|i| i.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn name_length_counts_characters() {
        let catalog = Catalog::standard();
        let flto = catalog.lookup("FLTO").unwrap();
        // five characters, ten bytes
        assert!(Taco::new("ñññññ", vec![flto]).is_ok());
        assert!(Taco::new("ñññ", vec![flto]).is_err());
    }

    #[test]
    fn reports_all_violations_at_once() {
        let errors = Taco::new("Tc", Vec::new()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field(NAME).collect::<Vec<_>>(), [NAME_TOO_SHORT]);
        assert_eq!(errors.for_field(INGREDIENTS).collect::<Vec<_>>(), [NO_INGREDIENTS]);
    }
}
