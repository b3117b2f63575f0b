pub mod connections;
pub mod errors;
pub mod index;
pub mod lookup;
pub mod search_config;
pub mod string_normalization;
pub mod tier;
pub mod trio;

// Re-export commonly used items
pub use connections::{
    PathSearchResult, SearchStats, find_bridges, neighbors, search_paths, search_paths_with_config,
};
pub use errors::{IngredientNotFound, InvalidTierError};
pub use index::CompatibilityIndex;
pub use lookup::IngredientLookup;
pub use search_config::{DEFAULT_MAX_DEPTH, SearchConfig};
pub use tier::{IntoTier, Tier};
pub use trio::{Trio, TrioRecord};
