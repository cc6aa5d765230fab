//! Level parser
//!
//! Turns rows of level text into a [`Level`]. Each character is read twice:
//! once as a grid cell (`x` wall, `!` lava, anything else empty) and once
//! through the symbol table, which may spawn an actor at that cell.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::grid::{Cell, Grid, Obstacle};
use super::level::Level;
use super::vector::Vector;
use crate::consts::{LAVA_SYMBOL, WALL_SYMBOL};
use crate::symbols::{Spawner, SymbolTable};

/// Builds levels from row text using a symbol table
#[derive(Debug, Clone)]
pub struct LevelParser {
    symbols: SymbolTable,
    /// Source of coin spring phases
    rng: Pcg32,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(SymbolTable::default(), 0)
    }
}

impl LevelParser {
    /// Parser over `symbols`, seeding coin phases from `seed`
    pub fn new(symbols: SymbolTable, seed: u64) -> Self {
        Self {
            symbols,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<&Spawner> {
        self.symbols.get(symbol)
    }

    pub fn obstacle_from_symbol(symbol: char) -> Cell {
        match symbol {
            WALL_SYMBOL => Some(Obstacle::Wall),
            LAVA_SYMBOL => Some(Obstacle::Lava),
            _ => None,
        }
    }

    /// One grid row per input row, lengths preserved
    pub fn create_grid<S: AsRef<str>>(&self, rows: &[S]) -> Grid {
        rows.iter()
            .map(|row| row.as_ref().chars().map(Self::obstacle_from_symbol).collect())
            .collect::<Vec<Vec<Cell>>>()
            .into()
    }

    /// Actors for every mapped symbol, in row-major scan order
    pub fn create_actors<S: AsRef<str>>(&mut self, rows: &[S]) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(spawner) = self.symbols.get(symbol) else {
                    continue;
                };
                let pos = Vector::new(x as f64, y as f64);
                match spawner.spawn(pos, &mut self.rng) {
                    Some(Ok(actor)) => actors.push(actor),
                    Some(Err(e)) => {
                        log::warn!("Skipping {:?} at ({}, {}): {}", symbol, x, y, e);
                    }
                    None => {}
                }
            }
        }
        actors
    }

    pub fn parse<S: AsRef<str>>(&mut self, rows: &[S]) -> Level {
        let grid = self.create_grid(rows);
        let actors = self.create_actors(rows);
        log::debug!(
            "Parsed {} rows: {} actors",
            rows.len(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}
