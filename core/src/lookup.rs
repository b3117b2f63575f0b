use crate::errors::IngredientNotFound;
use crate::index::CompatibilityIndex;
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;

/// Maps loose user spellings onto the identifiers stored in an index.
pub struct IngredientLookup<'a> {
    by_clean_name: FxHashMap<String, Vec<&'a str>>,
}

impl<'a> IngredientLookup<'a> {
    pub fn new(index: &'a CompatibilityIndex) -> Self {
        let mut by_clean_name: FxHashMap<String, Vec<&'a str>> = FxHashMap::default();

        for ingredient in index.ingredients() {
            by_clean_name
                .entry(clean_str(ingredient))
                .or_default()
                .push(ingredient);
        }

        // Ingredient sets iterate in hash order; keep the fallback pick stable.
        for candidates in by_clean_name.values_mut() {
            candidates.sort_unstable();
        }

        Self { by_clean_name }
    }

    /// Resolves `name` to its canonical spelling.
    ///
    /// When several dataset spellings clean to the same key, an exact match
    /// wins, then a case-insensitive one, then the first candidate in sorted
    /// order.
    pub fn find_ingredient(&self, name: &str) -> Result<&'a str, IngredientNotFound> {
        let not_found = || IngredientNotFound {
            name: name.to_string(),
        };

        let candidates = self.by_clean_name.get(&clean_str(name)).ok_or_else(not_found)?;

        if candidates.len() == 1 {
            return Ok(candidates[0]);
        }

        let trimmed_query = name.trim();
        let lowercase_query = trimmed_query.to_lowercase();
        candidates
            .iter()
            .find(|candidate| **candidate == trimmed_query)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|candidate| candidate.to_lowercase() == lowercase_query)
            })
            .or_else(|| candidates.first())
            .copied()
            .ok_or_else(not_found)
    }

    pub fn len(&self) -> usize {
        self.by_clean_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_clean_name.is_empty()
    }
}
