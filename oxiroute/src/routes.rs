//! Route simulation and scoring.

use crate::{Direction, Grid, Position};

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;

/// The trace of a move sequence simulated on a grid.
///
/// All positions are grid-local.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Route {
    visited: HashSet<Position, RandomState>,
    end: Position,
    steps: u32,
    penalty: u32,
    reached_target: bool,
}

impl Route {
    /// Returns the set of cells the agent stood on,
    /// including the start cell.
    pub fn visited(&self) -> &HashSet<Position, RandomState> {
        &self.visited
    }

    /// Returns whether the agent stood on a cell.
    pub fn contains(&self, local: Position) -> bool {
        self.visited.contains(&local)
    }

    /// Returns the agent's final position.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns the number of moves counted against the route.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Returns the revisit penalty. Starts at 1.
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Returns whether evaluation stopped on the target.
    pub fn reached_target(&self) -> bool {
        self.reached_target
    }
}

/// The result of evaluating a move sequence.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RouteOutcome {
    pub fitness: f64,
    pub route: Route,
}

/// Simulates `moves` from the grid's start cell and scores them.
///
/// Moves leaving the grid or entering a cell that is not
/// [`Accessible`] are rejected: the agent stays put but the
/// move still counts as a step. Entering an already-visited
/// cell increments the penalty. Simulation stops as soon as
/// the agent steps onto the target; the move that reaches it
/// is not counted.
///
/// The fitness is `1 / (distance + penalty + steps)`, where
/// `distance` is the Manhattan distance from the final position
/// to the target. It always lies in `(0, 1]`, and equals `1`
/// only when the target is reached on the very first move
/// without backtracking.
///
/// [`Accessible`]: crate::Cell::Accessible
///
/// # Examples
/// ```
/// use oxiroute::{evaluate_route, Direction};
/// use oxiroute_tiles::TileGrid;
/// use oxiroute::Position;
///
/// let grid = TileGrid::parse(
///     Position::new(0, 0),
///     "....\n\
///      ....\n\
///      ....\n\
///      ST..",
/// )
/// .unwrap();
///
/// let outcome = evaluate_route(&grid, &[Direction::East]);
/// assert_eq!(outcome.fitness, 1.0);
/// assert!(outcome.route.reached_target());
/// ```
pub fn evaluate_route<G: Grid + ?Sized>(grid: &G, moves: &[Direction]) -> RouteOutcome {
    let target = grid.local_target();
    let mut position = grid.local_start();
    let mut route = Route {
        visited: HashSet::default(),
        end: position,
        steps: 0,
        penalty: 1,
        reached_target: false,
    };
    route.visited.insert(position);

    for &direction in moves {
        let candidate = direction.step(position);
        if grid.is_accessible(candidate) {
            position = candidate;
            if !route.visited.insert(position) {
                route.penalty += 1;
            }
            if position == target {
                route.reached_target = true;
                break;
            }
        }
        route.steps += 1;
    }

    route.end = position;
    let denominator = position.manhattan_distance(target) + route.penalty + route.steps;
    RouteOutcome {
        fitness: 1.0 / f64::from(denominator),
        route,
    }
}
