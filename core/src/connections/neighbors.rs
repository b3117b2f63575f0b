use crate::errors::InvalidTierError;
use crate::index::CompatibilityIndex;
use crate::tier::{IntoTier, Tier};
use crate::trio::trio_contains;
use rustc_hash::FxHashSet;

/// Ingredients sharing at least one `tier` trio with `ingredient`.
///
/// An ingredient is never its own neighbor. Names absent from the tier
/// yield an empty set rather than an error.
pub fn neighbors(
    index: &CompatibilityIndex,
    ingredient: &str,
    tier: impl IntoTier,
) -> Result<FxHashSet<String>, InvalidTierError> {
    let tier = tier.into_tier()?;

    Ok(compatible_ingredients(index, ingredient, tier)
        .into_iter()
        .map(str::to_owned)
        .collect())
}

/// Borrowing form of [`neighbors`], deduplicated and in order of first
/// appearance in the tier's partition.
pub fn compatible_ingredients<'a>(
    index: &'a CompatibilityIndex,
    ingredient: &str,
    tier: Tier,
) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();

    index
        .trios(tier)
        .iter()
        .filter(|trio| trio_contains(trio, ingredient))
        .flat_map(|trio| trio.iter().map(String::as_str))
        .filter(|&member| member != ingredient && seen.insert(member))
        .collect()
}
