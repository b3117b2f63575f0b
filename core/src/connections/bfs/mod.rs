mod state;

use super::neighbors::compatible_ingredients;
use crate::errors::InvalidTierError;
use crate::index::CompatibilityIndex;
use crate::search_config::SearchConfig;
use crate::tier::{IntoTier, Tier};
use rustc_hash::FxHashSet;
use state::PathSearchState;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub paths_expanded: usize,
    pub duration_ms: u64,
    /// The expansion budget ran out before the frontier was exhausted.
    pub truncated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PathSearchResult {
    /// Ingredients strictly between the endpoints of any completed path.
    pub intermediates: FxHashSet<String>,
    /// Completed paths, start and goal included, in discovery order.
    pub paths: Vec<Vec<String>>,
    pub stats: SearchStats,
}

/// Ingredients lying between `start` and `goal` on any simple path of at
/// most `max_depth` hops through the `tier` compatibility graph.
pub fn search_paths(
    index: &CompatibilityIndex,
    start: &str,
    goal: &str,
    tier: impl IntoTier,
    max_depth: usize,
) -> Result<FxHashSet<String>, InvalidTierError> {
    let result = search_paths_with_config(index, start, goal, tier, &SearchConfig::new(max_depth))?;
    Ok(result.intermediates)
}

/// Same traversal as [`search_paths`], also returning the completed paths
/// and honoring the optional expansion budget in `config`.
pub fn search_paths_with_config(
    index: &CompatibilityIndex,
    start: &str,
    goal: &str,
    tier: impl IntoTier,
    config: &SearchConfig,
) -> Result<PathSearchResult, InvalidTierError> {
    let tier = tier.into_tier()?;
    let search_timer = Instant::now();

    let mut search_state = PathSearchState::new(start);
    let truncated = run_search(&mut search_state, index, goal, tier, config);

    let stats = SearchStats {
        paths_expanded: search_state.paths_expanded,
        duration_ms: search_timer.elapsed().as_millis() as u64,
        truncated,
    };

    if truncated {
        tracing::warn!(
            start,
            goal,
            %tier,
            budget = ?config.max_expansions,
            "path search stopped by expansion budget"
        );
    }

    tracing::debug!(
        start,
        goal,
        %tier,
        max_depth = config.max_depth,
        paths_found = search_state.completed_paths.len(),
        paths_expanded = stats.paths_expanded,
        duration_ms = stats.duration_ms,
        "bounded path search finished"
    );

    Ok(PathSearchResult {
        intermediates: search_state
            .intermediates
            .into_iter()
            .map(str::to_owned)
            .collect(),
        paths: search_state
            .completed_paths
            .into_iter()
            .map(|path| path.into_iter().map(str::to_owned).collect())
            .collect(),
        stats,
    })
}

/// Drains the frontier breadth-first. Returns whether the expansion budget
/// cut the search short.
fn run_search<'a>(
    search_state: &mut PathSearchState<'a>,
    index: &'a CompatibilityIndex,
    goal: &str,
    tier: Tier,
    config: &SearchConfig,
) -> bool {
    while let Some(path) = search_state.next_path() {
        // Hop count of any one-step extension of `path`.
        let extended_hops = path.len();
        if extended_hops > config.max_depth {
            continue;
        }

        if config
            .max_expansions
            .is_some_and(|budget| search_state.paths_expanded >= budget)
        {
            return true;
        }
        search_state.paths_expanded += 1;

        let Some(&current) = path.last() else {
            continue;
        };

        for next in compatible_ingredients(index, current, tier) {
            if path.contains(&next) {
                continue;
            }

            let mut extended = path.clone();
            extended.push(next);

            if next == goal {
                search_state.record_completed(extended);
            } else if extended_hops < config.max_depth {
                search_state.enqueue(extended);
            }
        }
    }

    false
}
