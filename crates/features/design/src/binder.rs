use taco_domain::catalog::Catalog;
use taco_domain::constants::{INGREDIENTS, NAME};
use taco_domain::taco::Taco;
use taco_domain::validation::FieldErrors;

/// The raw design form as submitted, before ingredient resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacoSubmission {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl TacoSubmission {
    /// Collects form pairs: the last `name` wins, every `ingredients` value is kept
    /// in submission order, and unrelated fields are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        pairs.into_iter().fold(Self::default(), |mut submission, (key, value)| {
            match key.as_ref() {
                NAME => submission.name = value.into(),
                INGREDIENTS => submission.ingredients.push(value.into()),
                _ => {},
            }
            submission
        })
    }

    /// Resolves every identifier against `catalog` and validates the result.
    ///
    /// # Errors
    /// Returns unknown identifiers together with any validation failures, so the
    /// form can show every problem at once.
    pub fn bind(&self, catalog: &Catalog) -> Result<Taco, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut ingredients = Vec::with_capacity(self.ingredients.len());

        for id in &self.ingredients {
            match catalog.lookup(id) {
                Ok(ingredient) => ingredients.push(ingredient),
                Err(e) => errors.reject(INGREDIENTS, e.to_string()),
            }
        }

        match Taco::new(self.name.as_str(), ingredients) {
            Ok(taco) => errors.into_result(taco),
            Err(invalid) => {
                errors.merge(invalid);
                Err(errors)
            },
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.ingredients.iter().any(|selected| selected == id)
    }
}
