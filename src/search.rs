//! Best-first search over packed states.
//!
//! The frontier is popped in packed-integer order: lowest heuristic first,
//! then lowest depth, then lowest arrangement. Depth only breaks ties, so the
//! search is greedy and the path it returns is not guaranteed to be shortest.
//!
//! Duplicates are collapsed when popped rather than when pushed. The same
//! arrangement may sit in the frontier several times, so frontier size is not
//! a bound on the number of distinct states.

use log::{debug, info, trace};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::error::SearchError;
use crate::heuristic::total_distance;
use crate::moves::Move;
use crate::puzzle::{Alignment, Arrangement, ArrangementKey, PackedState};

/// A node of the path tree. Frontier entries share ancestors through `Rc`,
/// so a chain lives exactly as long as something still points into it.
#[derive(Debug)]
struct Link {
    state: PackedState,
    alignment: Alignment,
    parent: Option<Rc<Link>>,
}

// Unlinks the chain iteratively so long paths don't recurse on drop.
impl Drop for Link {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(link) = parent {
            parent = match Rc::try_unwrap(link) {
                Ok(mut link) => link.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Min-heap entry over `Link`, ordered by the packed priority.
struct Frontier(Rc<Link>);

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.0.state.priority() == other.0.state.priority()
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so `BinaryHeap` pops the smallest priority.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.state.priority().cmp(&self.0.state.priority())
    }
}

/// One state on the solution path and the alignment it was reached with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    pub arrangement: Arrangement,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier.
    pub popped: u64,
    /// Pops discarded because the arrangement was already expanded.
    pub skipped: u64,
    /// Distinct arrangements expanded (size of the visited set).
    pub expanded: usize,
    pub pushed: u64,
    pub peak_frontier: usize,
}

/// Emitted when a processed node is deeper than any before it, or carries a
/// larger heuristic than any seen at the current depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Depth { depth: u16, heuristic: u8 },
    Heuristic { heuristic: u8 },
}

#[derive(Debug, Default)]
struct ProgressTracker {
    max_depth: Option<u16>,
    max_heuristic_at_depth: u8,
}

impl ProgressTracker {
    fn observe(&mut self, depth: u16, heuristic: u8) -> Option<Progress> {
        if self.max_depth.map_or(true, |max| depth > max) {
            self.max_depth = Some(depth);
            self.max_heuristic_at_depth = heuristic;
            Some(Progress::Depth { depth, heuristic })
        } else if heuristic > self.max_heuristic_at_depth {
            self.max_heuristic_at_depth = heuristic;
            Some(Progress::Heuristic { heuristic })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<PathNode>,
    stats: SearchStats,
}

impl Solution {
    /// Root first, goal last.
    pub fn path(&self) -> &[PathNode] {
        &self.path
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of flips from the scramble to the goal.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flips taken, recovered from the alignment of each non-root node.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .iter()
            .skip(1)
            .filter_map(|node| Move::from_alignment(node.alignment))
            .collect()
    }
}

/// Outcome of a single `Search::step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Solved(Solution),
    Exhausted,
}

/// One solve. Owns the frontier and the visited set for its whole lifetime.
pub struct Search {
    frontier: BinaryHeap<Frontier>,
    visited: FxHashSet<ArrangementKey>,
    moves: Vec<Move>,
    tracker: ProgressTracker,
    stats: SearchStats,
}

impl Search {
    pub fn new(initial: Arrangement) -> Self {
        Self::with_moves(initial, &Move::ALL)
    }

    /// Searches using only `moves` from the transition table.
    pub fn with_moves(initial: Arrangement, moves: &[Move]) -> Self {
        let key = initial.key();
        let root = Link {
            state: PackedState::from(key)
                .with_depth(0)
                .with_heuristic(total_distance(key)),
            alignment: Alignment::INITIAL,
            parent: None,
        };
        info!(
            "starting search from {} (estimate {})",
            initial,
            root.state.heuristic()
        );

        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier(Rc::new(root)));

        Self {
            frontier,
            visited: FxHashSet::default(),
            moves: moves.to_vec(),
            tracker: ProgressTracker::default(),
            stats: SearchStats {
                pushed: 1,
                peak_frontier: 1,
                ..SearchStats::default()
            },
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Pops one frontier entry and processes it.
    pub fn step<F>(&mut self, on_progress: &mut F) -> Status
    where
        F: FnMut(Progress),
    {
        let Some(Frontier(link)) = self.frontier.pop() else {
            return Status::Exhausted;
        };
        self.stats.popped += 1;

        let key = link.state.key();
        if !self.visited.insert(key) {
            self.stats.skipped += 1;
            return Status::Running;
        }
        self.stats.expanded = self.visited.len();

        let depth = link.state.depth();
        let heuristic = link.state.heuristic();
        trace!("pop {:#012x} depth {} estimate {}", key.raw(), depth, heuristic);
        if let Some(progress) = self.tracker.observe(depth, heuristic) {
            debug!("{:?}", progress);
            on_progress(progress);
        }

        if key.is_goal() {
            return Status::Solved(self.reconstruct(&link));
        }

        self.expand(&link);
        Status::Running
    }

    /// Steps until the goal is dequeued or the frontier runs dry.
    pub fn run<F>(mut self, mut on_progress: F) -> Result<Solution, SearchError>
    where
        F: FnMut(Progress),
    {
        loop {
            match self.step(&mut on_progress) {
                Status::Running => continue,
                Status::Solved(solution) => {
                    info!(
                        "solved in {} flips: {:?}",
                        solution.len(),
                        solution.stats()
                    );
                    return Ok(solution);
                }
                Status::Exhausted => {
                    info!("frontier exhausted: {:?}", self.stats);
                    return Err(SearchError::Exhausted { stats: self.stats });
                }
            }
        }
    }

    fn expand(&mut self, link: &Rc<Link>) {
        let depth = link.state.depth().saturating_add(1);

        for &movement in &self.moves {
            let (child, alignment) = movement.apply(link.state.key());
            if self.visited.contains(&child) {
                continue;
            }

            let state = PackedState::from(child)
                .with_depth(depth)
                .with_heuristic(total_distance(child));
            self.frontier.push(Frontier(Rc::new(Link {
                state,
                alignment,
                parent: Some(Rc::clone(link)),
            })));
            self.stats.pushed += 1;
        }

        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    fn reconstruct(&self, goal: &Rc<Link>) -> Solution {
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(link) = cursor {
            path.push(PathNode {
                arrangement: link.state.key().arrangement(),
                alignment: link.alignment,
            });
            cursor = link.parent.as_ref();
        }
        path.reverse();

        for (step, node) in path.iter().enumerate().skip(1) {
            debug!("{}. {} ({})", step, node.arrangement, node.alignment);
        }

        Solution {
            path,
            stats: self.stats,
        }
    }
}

/// Solves `initial` with the full move table and no progress reporting.
pub fn solve(initial: Arrangement) -> Result<Solution, SearchError> {
    Search::new(initial).run(|_| {})
}
