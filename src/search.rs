use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use log::{debug, info, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SearchError;
use crate::puzzle::{Board, Move};

/// Frontier discipline used by [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// FIFO expansion. Always finds a shortest path.
    BreadthFirst,
    /// Expands the lowest `g + h` first, using Manhattan distance as `h`.
    BestFirst,
}

impl Strategy {
    fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::BestFirst)
    }
}

/// A node of the search: a board, where its blank is, and how we got here.
///
/// Each state owns its path; successors copy and extend it so siblings never
/// share history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    board: Board,
    blank: (usize, usize),
    path: Vec<Move>,
    cost: usize,
    heuristic: usize,
}

impl SearchState {
    /// Root state for `board`. The blank is located by scanning once here;
    /// after that every successor carries its own coordinates.
    pub fn new(board: Board, with_heuristic: bool) -> Self {
        let blank = board.blank_position();
        let heuristic = if with_heuristic {
            board.manhattan_distance()
        } else {
            0
        };
        Self {
            board,
            blank,
            path: Vec::new(),
            cost: 0,
            heuristic,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    pub fn path(&self) -> &[Move] {
        &self.path
    }

    /// Moves taken so far (`g`).
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Estimated moves remaining (`h`). Always 0 when built without heuristic.
    pub fn heuristic(&self) -> usize {
        self.heuristic
    }

    pub fn estimate(&self) -> usize {
        self.cost + self.heuristic
    }

    /// Neighbouring states, in `Move::ALL` order, for every direction that
    /// keeps the blank on the grid.
    pub fn successors(&self, with_heuristic: bool) -> Vec<SearchState> {
        let size = self.board.size();
        Move::ALL
            .iter()
            .filter_map(|&dir| {
                let dest = dir.target(self.blank, size)?;
                let board = self.board.swap(self.blank, dest);
                let heuristic = if with_heuristic {
                    board.manhattan_distance()
                } else {
                    0
                };
                let mut path = Vec::with_capacity(self.path.len() + 1);
                path.extend_from_slice(&self.path);
                path.push(dir);
                Some(SearchState {
                    board,
                    blank: dest,
                    path,
                    cost: self.cost + 1,
                    heuristic,
                })
            })
            .collect()
    }

    fn into_path(self) -> Vec<Move> {
        self.path
    }
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped and expanded (goal pop and stale duplicates excluded).
    pub expanded: usize,
    /// Successors produced, including ones already visited.
    pub generated: usize,
    /// Largest frontier length seen.
    pub max_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// The parity check ruled the board out; nothing was expanded.
    Unsolvable,
    /// Every reachable board was visited without meeting the goal.
    Exhausted(SearchStats),
    /// The configured expansion limit was hit first.
    LimitReached(SearchStats),
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Outcome::Solved(solution) => solution.stats,
            Outcome::Unsolvable => SearchStats::default(),
            Outcome::Exhausted(stats) | Outcome::LimitReached(stats) => *stats,
        }
    }
}

/// Heap entry ordered by `(estimate, seq)` only.
#[derive(Debug)]
struct Queued {
    estimate: usize,
    seq: u64,
    state: SearchState,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .cmp(&other.estimate)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

enum Frontier {
    Fifo(VecDeque<SearchState>),
    /// Min-heap; equal estimates pop in insertion order.
    Priority {
        heap: BinaryHeap<Reverse<Queued>>,
        next_seq: u64,
    },
}

impl Frontier {
    fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Strategy::BestFirst => Frontier::Priority {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    fn push(&mut self, state: SearchState) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(state),
            Frontier::Priority { heap, next_seq } => {
                heap.push(Reverse(Queued {
                    estimate: state.estimate(),
                    seq: *next_seq,
                    state,
                }));
                *next_seq += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<SearchState> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Priority { heap, .. } => heap.pop().map(|Reverse(entry)| entry.state),
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }
}

/// Visited-set graph search towards a fixed goal board.
///
/// The goal is owned by the solver, so one instance can be reused for any
/// number of start boards of the same size.
#[derive(Debug, Clone)]
pub struct Solver {
    goal: Board,
    strategy: Strategy,
    check_solvability: bool,
    max_expansions: Option<usize>,
}

impl Solver {
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn new(size: usize, strategy: Strategy) -> Self {
        Self {
            goal: Board::goal(size),
            strategy,
            check_solvability: true,
            max_expansions: None,
        }
    }

    /// Toggle the parity precheck. With it off, an unsolvable board is only
    /// reported once its whole reachable component has been explored.
    pub fn with_solvability_check(mut self, enabled: bool) -> Self {
        self.check_solvability = enabled;
        self
    }

    /// Stop after expanding this many states. `None` means unbounded.
    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn solve(&self, start: &Board) -> Result<Outcome, SearchError> {
        if start.size() != self.goal.size() {
            return Err(SearchError::SizeMismatch {
                expected: self.goal.size(),
                found: start.size(),
            });
        }

        if self.check_solvability && !start.is_solvable() {
            info!("board failed the parity check, skipping search");
            return Ok(Outcome::Unsolvable);
        }

        let with_heuristic = self.strategy.uses_heuristic();
        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new(self.strategy);
        // Breadth-first marks boards when they are enqueued; best-first
        // closes them when they are popped.
        let mut visited: FxHashSet<Board> = FxHashSet::default();
        // Cheapest `g` pushed so far for each open board (best-first only).
        let mut best_cost: FxHashMap<Board, usize> = FxHashMap::default();

        let root = SearchState::new(start.clone(), with_heuristic);
        debug!(
            "{:?} search from h={} on a {}x{} board",
            self.strategy,
            root.heuristic(),
            start.size(),
            start.size()
        );
        match self.strategy {
            Strategy::BreadthFirst => {
                visited.insert(root.board().clone());
            }
            Strategy::BestFirst => {
                best_cost.insert(root.board().clone(), 0);
            }
        }
        frontier.push(root);
        stats.max_frontier = 1;

        while let Some(current) = frontier.pop() {
            if self.strategy == Strategy::BestFirst && !visited.insert(current.board().clone()) {
                // Stale entry, a cheaper copy was already expanded.
                continue;
            }

            if current.board() == &self.goal {
                info!(
                    "solved in {} moves ({} expanded, {} generated, {} visited)",
                    current.cost(),
                    stats.expanded,
                    stats.generated,
                    visited.len()
                );
                return Ok(Outcome::Solved(Solution {
                    moves: current.into_path(),
                    stats,
                }));
            }

            if self.max_expansions.is_some_and(|limit| stats.expanded >= limit) {
                info!("expansion limit reached after {} states", stats.expanded);
                return Ok(Outcome::LimitReached(stats));
            }

            stats.expanded += 1;
            trace!("expand g={} h={}", current.cost(), current.heuristic());

            for child in current.successors(with_heuristic) {
                stats.generated += 1;
                if visited.contains(child.board()) {
                    continue;
                }
                match self.strategy {
                    Strategy::BreadthFirst => {
                        visited.insert(child.board().clone());
                    }
                    Strategy::BestFirst => {
                        if best_cost
                            .get(child.board())
                            .is_some_and(|&known| known <= child.cost())
                        {
                            continue;
                        }
                        best_cost.insert(child.board().clone(), child.cost());
                    }
                }
                frontier.push(child);
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        info!(
            "frontier exhausted after {} expansions, no solution",
            stats.expanded
        );
        Ok(Outcome::Exhausted(stats))
    }
}
