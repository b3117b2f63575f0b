use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub type Path<'a> = Vec<&'a str>;

pub struct PathSearchState<'a> {
    frontier: VecDeque<Path<'a>>,
    visited_paths: FxHashSet<Path<'a>>,
    pub completed_paths: Vec<Path<'a>>,
    pub intermediates: FxHashSet<&'a str>,
    pub paths_expanded: usize,
}

impl<'a> PathSearchState<'a> {
    pub fn new(start: &'a str) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(vec![start]);

        Self {
            frontier,
            visited_paths: FxHashSet::default(),
            completed_paths: Vec::new(),
            intermediates: FxHashSet::default(),
            paths_expanded: 0,
        }
    }

    pub fn next_path(&mut self) -> Option<Path<'a>> {
        self.frontier.pop_front()
    }

    /// Keeps a path that ends at the goal, collecting everything between the
    /// endpoints. A path already recorded is ignored.
    pub fn record_completed(&mut self, path: Path<'a>) {
        if !self.visited_paths.insert(path.clone()) {
            return;
        }

        if let [_, interior @ .., _] = path.as_slice() {
            self.intermediates.extend(interior.iter().copied());
        }

        tracing::trace!(path = ?path, "completed path");
        self.completed_paths.push(path);
    }

    /// Queues a path for later expansion unless that exact sequence was seen.
    pub fn enqueue(&mut self, path: Path<'a>) {
        if self.visited_paths.insert(path.clone()) {
            self.frontier.push_back(path);
        }
    }
}
