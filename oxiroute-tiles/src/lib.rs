//! # OxiRoute-Tiles
//! A tile-map implementation of the [`OxiRoute` crate](https://crates.io/crates/oxiroute)'s `Grid` trait.
//!
//! Provides a [`TileGrid`] type usable by `OxiRoute` `Evolution`s, which can be built:
//! - from a text map, via [`TileGrid::parse`] or a serialisable [`MapDescription`];
//! - from named tiles, via [`TileGrid::from_tiles`] and a [`Tileset`] such as the [`DesertTileset`].
//!
//! Evolved routes can be inspected as text with [`RouteMap`].
//!
//! # Example usage: Evolution of a route across the desert
//! ```
//! use oxiroute::{Evolution, EvolutionConfig, Position, State};
//! use oxiroute_tiles::{RouteMap, TileGrid};
//! use std::num::NonZeroUsize;
//!
//! fn main() {
//!     let grid = TileGrid::parse(
//!         Position::new(0, 0),
//!         "....T\n\
//!          .###.\n\
//!          S....",
//!     )
//!     .unwrap();
//!
//!     let config = EvolutionConfig {
//!         crossover_rate: 0.7,
//!         mutation_rate: 0.01,
//!         population_size: NonZeroUsize::new(60).unwrap(),
//!         chromosome_length: NonZeroUsize::new(24).unwrap(),
//!     };
//!
//!     let mut evolution = Evolution::with_seed(&grid, config, 42).unwrap();
//!     evolution.run(300);
//!     if let Some(route) = evolution.best_route() {
//!         println!("{}", RouteMap::new(&grid, route));
//!     }
//! }
//! ```

mod errors;
mod parsing;
mod render;
mod tile_grid;
mod tilesets;

pub use errors::GridError;
pub use parsing::MapDescription;
pub use render::RouteMap;
pub use tile_grid::TileGrid;
pub use tilesets::{DesertTileset, Tileset};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
