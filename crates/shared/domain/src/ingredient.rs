use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Ingredient groups offered on the design form.
///
/// The lowercase name doubles as the model key under which the
/// catalog exposes the bucket (`wrap`, `protein`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Wrap,
    Protein,
    Veggies,
    Cheese,
    Sauce,
}

impl Category {
    /// Heading shown above the category's checkboxes.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Wrap => "Designate your wrap:",
            Self::Protein => "Pick your protein:",
            Self::Veggies => "Determine your veggies:",
            Self::Cheese => "Choose your cheese:",
            Self::Sauce => "Select your sauce:",
        }
    }
}

/// A selectable taco component. Instances are `'static` and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
}

impl Ingredient {
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str, category: Category) -> Self {
        Self { id, name, category }
    }
}
