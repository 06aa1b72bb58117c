use oxiroute::logging::Stats;
use oxiroute::{Evolution, EvolutionConfig, Grid, Position, State};
use oxiroute_tiles::{DesertTileset, RouteMap, TileGrid};

use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;

use log::info;
use rayon::prelude::*;
use serde::Deserialize;

const DEFAULT_MAP: &str = include_str!("../maps/desert.ron");
const MAX_GENERATIONS: usize = 2000;
const ITERATIONS: u64 = 200;

/// A painted desert tile layer: one digit per
/// `Desert_1_n` tile, spaces where nothing is painted.
#[derive(Deserialize)]
struct TileLayer {
    origin: Position,
    start: Position,
    target: Position,
    rows: Vec<String>,
}

impl TileLayer {
    fn tile_name(&self, world: Position) -> Option<String> {
        let local = world - self.origin;
        let row = self.rows.len().checked_sub(1 + local.y as usize)?;
        let glyph = self.rows.get(row)?.chars().nth(local.x as usize)?;
        glyph.is_ascii_digit().then(|| format!("Desert_1_{}", glyph))
    }

    fn into_grid(self) -> Result<TileGrid, Box<dyn Error>> {
        let height = self.rows.len() as u32;
        let width = self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let grid = TileGrid::from_tiles(
            self.origin,
            width,
            height,
            |p| self.tile_name(p),
            &DesertTileset,
            self.start,
            self.target,
        )?;
        Ok(grid)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let map = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_owned(),
    };
    let layer: TileLayer = ron::from_str(&map)?;
    let grid = layer.into_grid()?;

    let config = EvolutionConfig {
        crossover_rate: 0.7,
        mutation_rate: 0.001,
        population_size: NonZeroUsize::new(140).ok_or("population size must be positive")?,
        chromosome_length: NonZeroUsize::new(70).ok_or("chromosome length must be positive")?,
    };
    config.validate()?;

    info!(
        "desert map: {}x{}, from {} to {}",
        grid.width(),
        grid.height(),
        grid.start(),
        grid.target()
    );
    println!("{}", RouteMap::without_route(&grid));

    stress_test(&grid, &config)?;
    showcase(&grid, &config)?;
    Ok(())
}

/// Steps an evolution until its best route reaches the target,
/// returning the number of generations that took, or `None`
/// if the cap runs out first.
///
/// A route that ends on the target scores below 1 unless it
/// got there in a single move, so the run usually keeps going
/// past this point.
fn generations_to_target<G: Grid>(
    evolution: &mut Evolution<G>,
    max_generations: usize,
) -> Option<usize> {
    while evolution.generation() < max_generations {
        let state = evolution.step();
        if evolution.best_route()?.reached_target() {
            return Some(evolution.generation());
        }
        if state == State::Finished {
            break;
        }
    }
    None
}

/// Runs many independently seeded evolutions and reports
/// how many generations the successful ones took.
fn stress_test(grid: &TileGrid, config: &EvolutionConfig) -> Result<(), Box<dyn Error>> {
    let generations: Vec<Option<usize>> = (0..ITERATIONS)
        .into_par_iter()
        .map(|seed| {
            let mut evolution = Evolution::with_seed(grid, config.clone(), seed).ok()?;
            generations_to_target(&mut evolution, MAX_GENERATIONS)
        })
        .collect();

    let solved = generations.iter().flatten().map(|&g| g as f64);
    match Stats::from(solved) {
        Some(stats) => println!("Successful run generation count {:?}", stats),
        None => println!("No run found the target"),
    }
    println!(
        "{}% failure rate over {} iterations",
        generations.iter().filter(|g| g.is_none()).count() as f64 * 100.0 / ITERATIONS as f64,
        ITERATIONS
    );
    Ok(())
}

/// Evolves a single route and draws it.
fn showcase(grid: &TileGrid, config: &EvolutionConfig) -> Result<(), Box<dyn Error>> {
    let mut evolution = Evolution::new(grid, config.clone())?;
    let solved = generations_to_target(&mut evolution, MAX_GENERATIONS).is_some();
    if let Some(report) = evolution.report() {
        println!(
            "{} after {} generations, best fitness {}",
            if solved {
                "Solution found"
            } else {
                "Gave up"
            },
            evolution.generation(),
            report.best_fitness
        );
        println!("{}", RouteMap::new(grid, &report.best_route));
        println!("{}", ron::to_string(&report.champion)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize, length: usize) -> EvolutionConfig {
        EvolutionConfig {
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            population_size: NonZeroUsize::new(size).unwrap(),
            chromosome_length: NonZeroUsize::new(length).unwrap(),
        }
    }

    #[test]
    fn default_map_loads() {
        let layer: TileLayer = ron::from_str(DEFAULT_MAP).unwrap();
        let grid = layer.into_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (16, 10));
        assert_eq!(grid.start().manhattan_distance(grid.target()), 20);
        assert!(grid.is_accessible(grid.local_start()));
        assert!(grid.is_accessible(grid.local_target()));
    }

    #[test]
    fn reaching_the_target_counts_as_success() {
        // Three moves away, so a route on the target scores 1/2.
        let layer = TileLayer {
            origin: Position::new(0, 0),
            start: Position::new(0, 0),
            target: Position::new(2, 1),
            rows: vec!["000".to_owned(), "000".to_owned()],
        };
        let grid = layer.into_grid().unwrap();

        let mut solved = 0;
        for seed in 0..20 {
            let mut evolution = Evolution::with_seed(&grid, config(20, 8), seed).unwrap();
            match generations_to_target(&mut evolution, 200) {
                Some(generations) => {
                    solved += 1;
                    assert_eq!(generations, evolution.generation());
                    assert!(evolution.best_fitness() < 1.0);
                    assert_ne!(evolution.state(), State::Finished);
                }
                None => assert_eq!(evolution.generation(), 200),
            }
        }
        assert!(solved > 0);
    }

    #[test]
    fn unreachable_target_gives_up_at_cap() {
        let layer = TileLayer {
            origin: Position::new(0, 0),
            start: Position::new(0, 0),
            target: Position::new(2, 0),
            rows: vec!["030".to_owned()],
        };
        let grid = layer.into_grid().unwrap();
        let mut evolution = Evolution::with_seed(&grid, config(10, 8), 0).unwrap();
        assert_eq!(generations_to_target(&mut evolution, 30), None);
        assert_eq!(evolution.generation(), 30);
        assert!(!evolution.best_route().unwrap().reached_target());
    }
}
