//! A* search with a turn penalty.
//!
//! Searches the occupancy grid over an 8-connected (optionally 4-connected)
//! move set. Each frontier entry carries the direction it arrived by, and a
//! step that changes direction pays a fixed penalty on top of its move cost.
//! The best-cost map is keyed by cell only, so two entries reaching the same
//! cell from different directions compete on cost alone. That can
//! under-penalize a future turn, but keeps the state space at one entry per
//! cell and in practice only perturbs routes by a cell or two. There is no
//! closed set; a cell is re-expanded whenever a strictly cheaper entry
//! reaches it.

use crate::core::GridCell;
use crate::grid::OccupancyGrid;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Neighbor offsets in (row, col) order: cardinals first, then diagonals.
/// Expansion order is part of the tie-breaking behavior, so it is fixed.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A* search configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarConfig {
    /// Allow diagonal movement (default: true)
    #[serde(default = "default_allow_diagonal")]
    pub allow_diagonal: bool,

    /// Cost of a diagonal step (default: 1.414)
    #[serde(default = "default_diagonal_cost")]
    pub diagonal_cost: f32,

    /// Extra cost when a step changes direction (default: 0.2)
    #[serde(default = "default_turn_penalty")]
    pub turn_penalty: f32,

    /// Iteration budget before the search gives up (default: 100 000)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: default_allow_diagonal(),
            diagonal_cost: default_diagonal_cost(),
            turn_penalty: default_turn_penalty(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_allow_diagonal() -> bool {
    true
}
fn default_diagonal_cost() -> f32 {
    1.414
}
fn default_turn_penalty() -> f32 {
    0.2
}
fn default_max_iterations() -> usize {
    100_000
}

/// Result of a successful search
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Cell path from start to goal, endpoints included
    pub cells: Vec<GridCell>,
    /// Accumulated cost of the path (move costs plus turn penalties)
    pub cost: f32,
    /// Frontier entries popped before the goal was reached
    pub iterations: usize,
}

/// Frontier entry. Ordered as a min-heap on `f_cost` so that
/// `BinaryHeap::pop` yields the most promising entry.
struct SearchNode {
    f_cost: f32,
    g_cost: f32,
    cell: GridCell,
    /// Direction this entry arrived by, `None` for the start
    arrival: Option<(i32, i32)>,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

/// A* planner over an occupancy grid.
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    /// Create a planner with configuration.
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AStarConfig::default())
    }

    /// Find a path between two cells.
    ///
    /// Returns `None` when the frontier exhausts without reaching the goal
    /// or when the iteration budget runs out. Blocked start or goal cells
    /// are not special-cased; a blocked goal simply never enters the
    /// frontier and the search exhausts.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: GridCell,
        goal: GridCell,
    ) -> Option<PlannedPath> {
        trace!("[AStar] search {:?} -> {:?}", start, goal);

        if start == goal {
            return Some(PlannedPath {
                cells: vec![start],
                cost: 0.0,
                iterations: 0,
            });
        }

        let offsets = if self.config.allow_diagonal {
            &NEIGHBOR_OFFSETS[..]
        } else {
            &NEIGHBOR_OFFSETS[..4]
        };

        let mut frontier = BinaryHeap::new();
        let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
        let mut g_score: HashMap<GridCell, f32> = HashMap::new();

        g_score.insert(start, 0.0);
        frontier.push(SearchNode {
            f_cost: self.heuristic(start, goal),
            g_cost: 0.0,
            cell: start,
            arrival: None,
        });

        let mut iterations = 0usize;
        while let Some(node) = frontier.pop() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                warn!(
                    "[AStar] iteration budget {} exhausted searching {:?} -> {:?}",
                    self.config.max_iterations, start, goal
                );
                return None;
            }

            if node.cell == goal {
                let cells = self.reconstruct(&came_from, start, goal);
                trace!(
                    "[AStar] found path: {} cells, cost {:.3}, {} iterations",
                    cells.len(),
                    node.g_cost,
                    iterations
                );
                return Some(PlannedPath {
                    cells,
                    cost: node.g_cost,
                    iterations,
                });
            }

            for &(drow, dcol) in offsets {
                let neighbor = node.cell.offset(drow, dcol);
                if !grid.is_free(neighbor) {
                    continue;
                }

                let step_cost = if drow != 0 && dcol != 0 {
                    self.config.diagonal_cost
                } else {
                    1.0
                };
                let turn_cost = match node.arrival {
                    Some(dir) if dir != (drow, dcol) => self.config.turn_penalty,
                    _ => 0.0,
                };

                let tentative = node.g_cost + step_cost + turn_cost;
                let best = g_score.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative < best {
                    g_score.insert(neighbor, tentative);
                    came_from.insert(neighbor, node.cell);
                    frontier.push(SearchNode {
                        f_cost: tentative + self.heuristic(neighbor, goal),
                        g_cost: tentative,
                        cell: neighbor,
                        arrival: Some((drow, dcol)),
                    });
                }
            }
        }

        debug!(
            "[AStar] no path {:?} -> {:?} ({} iterations)",
            start, goal, iterations
        );
        None
    }

    /// Distance estimate to the goal: octile when diagonal movement is
    /// enabled, Manhattan otherwise. Turn penalties are not estimated, so
    /// the heuristic never overestimates.
    fn heuristic(&self, from: GridCell, to: GridCell) -> f32 {
        let drow = (to.row - from.row).abs() as f32;
        let dcol = (to.col - from.col).abs() as f32;

        if self.config.allow_diagonal {
            drow.max(dcol) + (self.config.diagonal_cost - 1.0) * drow.min(dcol)
        } else {
            drow + dcol
        }
    }

    /// Walk predecessor links back from the goal.
    fn reconstruct(
        &self,
        came_from: &HashMap<GridCell, GridCell>,
        start: GridCell,
        goal: GridCell,
    ) -> Vec<GridCell> {
        let mut cells = vec![goal];
        let mut current = goal;
        while current != start {
            match came_from.get(&current) {
                Some(&prev) => {
                    cells.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        cells.reverse();
        cells
    }
}
