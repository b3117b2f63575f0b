use super::neighbors::compatible_ingredients;
use crate::errors::InvalidTierError;
use crate::index::CompatibilityIndex;
use crate::tier::IntoTier;
use rustc_hash::FxHashSet;

/// Ingredients that pair with both `first` and `second` at `tier`.
///
/// Models two ingredients that never share a trio but each sit in a trio
/// with some third ingredient; that third ingredient is the bridge.
pub fn find_bridges(
    index: &CompatibilityIndex,
    first: &str,
    second: &str,
    tier: impl IntoTier,
) -> Result<FxHashSet<String>, InvalidTierError> {
    let tier = tier.into_tier()?;

    let first_neighbors: FxHashSet<&str> = compatible_ingredients(index, first, tier)
        .into_iter()
        .collect();

    Ok(compatible_ingredients(index, second, tier)
        .into_iter()
        .filter(|candidate| first_neighbors.contains(candidate))
        .map(str::to_owned)
        .collect())
}
