//! Shared fixtures for tests: small grid domains with known shortest paths.

use crate::graph::{FnHasher, NeighbourGenerator, StateHash};
use serde::Serialize;

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// A cell of a 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

pub fn manhattan(from: Position, to: Position) -> f64 {
    ((from.x - to.x).abs() + (from.y - to.y).abs()) as f64
}

pub fn position_hasher() -> FnHasher<fn(&Position) -> StateHash> {
    FnHasher(|state| format!("{}-{}", state.x, state.y))
}

/// A bounded 4-connected grid with impassable cells. Neighbours are produced
/// in a fixed right, down, left, up order so searches are reproducible.
#[derive(Debug, Clone)]
pub struct GridWorld {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Position>,
}

impl GridWorld {
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: vec![],
        }
    }
}

impl NeighbourGenerator for GridWorld {
    type State = Position;

    fn neighbours(&self, state: &Position) -> Vec<Position> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .iter()
            .map(|&(dx, dy)| Position {
                x: state.x + dx,
                y: state.y + dy,
            })
            .filter(|candidate| {
                candidate.x >= 0
                    && candidate.x < self.width
                    && candidate.y >= 0
                    && candidate.y < self.height
                    && !self.walls.contains(candidate)
            })
            .collect()
    }
}

/// A 4-connected square grid whose edges wrap around, so every cell has
/// exactly four neighbours.
#[derive(Debug, Clone, Copy)]
pub struct ToroidalGrid {
    pub size: i32,
}

impl ToroidalGrid {
    /// Manhattan distance where each axis may also be traversed across the
    /// wrap-around edge.
    pub fn manhattan_with_wraparound(&self, from: Position, to: Position) -> f64 {
        let x_dist = (from.x - to.x).abs();
        let y_dist = (from.y - to.y).abs();
        (x_dist.min(self.size - x_dist) + y_dist.min(self.size - y_dist)) as f64
    }
}

impl NeighbourGenerator for ToroidalGrid {
    type State = Position;

    fn neighbours(&self, state: &Position) -> Vec<Position> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .iter()
            .map(|&(dx, dy)| Position {
                x: (state.x + dx).rem_euclid(self.size),
                y: (state.y + dy).rem_euclid(self.size),
            })
            .collect()
    }
}
