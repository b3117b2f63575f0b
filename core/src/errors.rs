use thiserror::Error;

/// A tier argument that names none of the recognized compatibility tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tier '{value}': expected one of highly, moderately, compatible")]
pub struct InvalidTierError {
    pub value: String,
}

impl InvalidTierError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Returned by [`crate::IngredientLookup`] when no spelling matches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ingredient '{name}' not found in dataset")]
pub struct IngredientNotFound {
    pub name: String,
}
