pub mod bfs;
pub mod bridges;
pub mod neighbors;

// Re-export the public functions
pub use bfs::{PathSearchResult, SearchStats, search_paths, search_paths_with_config};
pub use bridges::find_bridges;
pub use neighbors::{compatible_ingredients, neighbors};
