//! A genetic algorithm that evolves fixed-length bit-string
//! genomes into move sequences steering an agent from a start
//! cell to a target cell across a 2D grid with impassable cells.
//!
//! Genomes decode two bits at a time into North/South/East/West
//! moves. Routes are simulated against any type implementing the
//! [`Grid`] trait and scored by how close they end to the target,
//! how many moves they spend and how often they double back.
//! Generations are bred with roulette-wheel selection, single-point
//! crossover and bit-flip mutation, and driven one
//! [`step`](Evolution::step) at a time. A tile-map grid is supplied
//! via the [`OxiRoute-Tiles`](https://crates.io/crates/oxiroute-tiles) crate.
//!
//! # Example usage: Evolution of a route around a wall, using `OxiRoute-Tiles`
//! ```
//! use oxiroute::{Evolution, EvolutionConfig, Position, State};
//! use oxiroute_tiles::TileGrid;
//! use std::num::NonZeroUsize;
//!
//! fn main() {
//!     let grid = TileGrid::parse(
//!         Position::new(0, 0),
//!         "......\n\
//!          .####.\n\
//!          S#..#T\n\
//!          ......",
//!     )
//!     .unwrap();
//!
//!     let config = EvolutionConfig {
//!         crossover_rate: 0.7,
//!         mutation_rate: 0.001,
//!         population_size: NonZeroUsize::new(140).unwrap(),
//!         chromosome_length: NonZeroUsize::new(70).unwrap(),
//!     };
//!
//!     let mut evolution = Evolution::new(grid, config).unwrap();
//!     while evolution.step() == State::Running && evolution.generation() < 100 {
//!         let report = evolution.report().unwrap();
//!         if report.best_route.reached_target() {
//!             println!("Solution found!: {}", report.champion);
//!             break;
//!         }
//!     }
//!     println!("Best fitness: {}", evolution.best_fitness());
//! }
//! ```

mod decoding;
mod evolution;
mod genome;
mod grid;
mod populations;
mod rng;
mod routes;

pub use decoding::{decode, encode};
pub use evolution::{Evolution, GenerationReport, State};
pub use genome::Genome;
pub use grid::{Cell, Direction, Grid, Position};
pub use populations::*;
pub use rng::RunRng;
pub use routes::{evaluate_route, Route, RouteOutcome};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
