//! Obstacle grid
//!
//! The static part of a level: rows of cells, each empty or holding an
//! obstacle. Rows may differ in length. Anything left of, above or right of
//! the grid counts as wall; anything below it counts as lava.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::vector::Vector;
use crate::error::SimError;

/// Obstacle tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid cell: an obstacle or nothing
pub type Cell = Option<Obstacle>;

/// Row-major obstacle grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    /// Longest row length
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at column `x`, row `y`; cells past the end of a short row are empty
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// First obstacle overlapped by the box at `pos` with `size`
    ///
    /// The box is widened to whole cells. Out-of-bounds checks win over the
    /// cell scan: leaving the grid sideways or upward is `Wall`, dropping
    /// below it is `Lava`. Inside the grid, cells are scanned top to bottom,
    /// left to right and the first obstacle found is returned.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Result<Option<Obstacle>, SimError> {
        let pos = pos.ensure_finite("pos")?;
        let size = size.ensure_finite("size")?;

        let min = DVec2::from(pos).floor().as_i64vec2();
        let max = DVec2::from(pos.plus(size)).ceil().as_i64vec2();
        let (left, top) = (min.x, min.y);
        let (right, bottom) = (max.x, max.y);

        if left < 0 || top < 0 || right > self.width as i64 {
            return Ok(Some(Obstacle::Wall));
        }
        if bottom > self.height() as i64 {
            return Ok(Some(Obstacle::Lava));
        }

        for y in top..bottom {
            for x in left..right {
                if let Some(obstacle) = self.cell(x as usize, y as usize) {
                    return Ok(Some(obstacle));
                }
            }
        }
        Ok(None)
    }
}

impl From<Vec<Vec<Cell>>> for Grid {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::new(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: Cell = Some(Obstacle::Wall);
    const L: Cell = Some(Obstacle::Lava);

    fn sample() -> Grid {
        // ". . x"
        // ". !"
        // ". . ."
        Grid::new(vec![
            vec![None, None, W],
            vec![None, L],
            vec![None, None, None],
        ])
    }

    #[test]
    fn test_dimensions() {
        let grid = sample();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);

        let empty = Grid::default();
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cell_lookup_past_short_row() {
        let grid = sample();
        assert_eq!(grid.cell(2, 0), W);
        assert_eq!(grid.cell(1, 1), L);
        assert_eq!(grid.cell(2, 1), None);
        assert_eq!(grid.cell(0, 9), None);
    }

    #[test]
    fn test_out_of_bounds_is_wall_or_lava() {
        let grid = sample();
        let unit = Vector::new(1.0, 1.0);
        assert_eq!(grid.obstacle_at(Vector::new(-0.5, 0.0), unit).unwrap(), W);
        assert_eq!(grid.obstacle_at(Vector::new(0.0, -0.1), unit).unwrap(), W);
        assert_eq!(grid.obstacle_at(Vector::new(2.5, 0.0), unit).unwrap(), W);
        assert_eq!(grid.obstacle_at(Vector::new(0.0, 2.5), unit).unwrap(), L);
    }

    #[test]
    fn test_wall_bound_beats_lava_bound() {
        let grid = sample();
        // Past the right edge and past the bottom at once
        let result = grid.obstacle_at(Vector::new(2.5, 2.5), Vector::new(1.0, 1.0)).unwrap();
        assert_eq!(result, W);
    }

    #[test]
    fn test_scan_finds_cells() {
        let grid = sample();
        let unit = Vector::new(1.0, 1.0);
        assert_eq!(grid.obstacle_at(Vector::new(2.0, 0.0), unit).unwrap(), W);
        assert_eq!(grid.obstacle_at(Vector::new(1.0, 1.0), unit).unwrap(), L);
        // Straddling the wall and lava cells: wall comes first in row-major order
        assert_eq!(grid.obstacle_at(Vector::new(1.5, 0.5), unit).unwrap(), W);
        // Fractional box that only touches the edge of the lava cell
        assert_eq!(grid.obstacle_at(Vector::new(0.0, 1.0), Vector::new(1.0, 1.0)).unwrap(), None);
        assert_eq!(grid.obstacle_at(Vector::new(0.2, 1.1), Vector::new(0.9, 0.5)).unwrap(), L);
    }

    #[test]
    fn test_empty_region_is_clear() {
        let grid = sample();
        assert_eq!(grid.obstacle_at(Vector::new(0.0, 0.0), Vector::new(2.0, 1.0)).unwrap(), None);
        assert_eq!(grid.obstacle_at(Vector::new(0.0, 2.0), Vector::new(3.0, 1.0)).unwrap(), None);
        // Missing cells of a short row read as empty
        assert_eq!(grid.obstacle_at(Vector::new(2.0, 1.0), Vector::new(1.0, 1.0)).unwrap(), None);
    }

    #[test]
    fn test_rejects_non_finite_query() {
        let grid = sample();
        assert!(matches!(
            grid.obstacle_at(Vector::new(f64::NAN, 0.0), Vector::new(1.0, 1.0)),
            Err(SimError::NonFiniteVector { what: "pos", .. })
        ));
        assert!(matches!(
            grid.obstacle_at(Vector::ZERO, Vector::new(1.0, f64::INFINITY)),
            Err(SimError::NonFiniteVector { what: "size", .. })
        ));
    }

    #[test]
    fn test_serde_keeps_width() {
        let grid = sample();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[[null,null,"wall"],[null,"lava"],[null,null,null]]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert_eq!(back.width(), 3);
    }

    proptest! {
        #[test]
        fn past_right_edge_is_always_wall(
            x in 2.01..50.0f64, y in -5.0..50.0f64, w in 1.0..3.0f64, h in 0.1..3.0f64,
        ) {
            let grid = sample();
            let result = grid.obstacle_at(Vector::new(x, y), Vector::new(w, h)).unwrap();
            prop_assert_eq!(result, W);
        }

        #[test]
        fn all_empty_grid_is_clear_inside(
            x in 0.0..4.0f64, y in 0.0..4.0f64, w in 0.0..1.0f64, h in 0.0..1.0f64,
        ) {
            let grid = Grid::new(vec![vec![None; 5]; 5]);
            let result = grid.obstacle_at(Vector::new(x, y), Vector::new(w, h)).unwrap();
            prop_assert_eq!(result, None);
        }
    }
}
