/// Hop limit used when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Configuration for bounded path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest path considered, counted in hops
    pub max_depth: usize,
    /// Stop after expanding this many frontier paths (unbounded when `None`)
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
