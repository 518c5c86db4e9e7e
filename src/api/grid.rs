use crate::api::cell::GeoCell;
use crate::core::constants::{CELL_SIZE, MAX_CELL};
use crate::core::tiles::Band;
use geo_types::{Point, Polygon, Rect};
use rayon::prelude::*;

/// Every valid cell overlapping a rectangular extent of the world.
///
/// Cell origins are multiples of the cell size across all tiles, so the
/// extent is walked on one global lattice. Lattice squares that fall in the
/// gaps between tiles have no GeoID and are skipped. Extents are clipped to
/// the modelled world, so infinite bounds are fine; NaN bounds give an empty
/// grid.
#[derive(Debug, Clone)]
pub struct GeoCellGrid {
    cells: Vec<GeoCell>,
}

impl GeoCellGrid {
    pub fn builder() -> GeoCellGridBuilder {
        GeoCellGridBuilder::new()
    }

    pub fn from_extent(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            cells: generate_cells_for_extent(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self::from_extent(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GeoCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeoCell> {
        self.cells.iter()
    }

    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&GeoCell> {
        let target = GeoCell::from_position(point).ok()?;
        self.cells.iter().find(|cell| cell.geoid == target.geoid)
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.par_iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GeoCell>
    where
        F: Fn(&GeoCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

#[derive(Debug, Default)]
pub struct GeoCellGridBuilder {
    min_x: Option<f64>,
    min_y: Option<f64>,
    max_x: Option<f64>,
    max_y: Option<f64>,
}

impl GeoCellGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extent(mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.min_x = Some(min_x);
        self.min_y = Some(min_y);
        self.max_x = Some(max_x);
        self.max_y = Some(max_y);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_x = Some(rect.min().x);
        self.min_y = Some(rect.min().y);
        self.max_x = Some(rect.max().x);
        self.max_y = Some(rect.max().y);
        self
    }

    /// Builds the grid. An unset extent yields an empty grid.
    pub fn build(self) -> GeoCellGrid {
        match (self.min_x, self.min_y, self.max_x, self.max_y) {
            (Some(min_x), Some(min_y), Some(max_x), Some(max_y)) => {
                GeoCellGrid::from_extent(min_x, min_y, max_x, max_y)
            }
            _ => GeoCellGrid { cells: Vec::new() },
        }
    }
}

/// World coordinates with a cell: from the low band origin to the end of the
/// last high band cell (exclusive).
const WORLD_MIN: f64 = Band::LOW.origin;
const WORLD_MAX: f64 = Band::HIGH.origin + (MAX_CELL + 1) as f64 * CELL_SIZE;

fn generate_cells_for_extent(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<GeoCell> {
    // f64::max/min would swallow a NaN bound
    if [min_x, min_y, max_x, max_y].iter().any(|v| v.is_nan()) {
        return Vec::new();
    }
    let (min_x, max_x) = (min_x.max(WORLD_MIN), max_x.min(WORLD_MAX));
    let (min_y, max_y) = (min_y.max(WORLD_MIN), max_y.min(WORLD_MAX));
    if !(min_x <= max_x && min_y <= max_y) {
        return Vec::new();
    }

    let first_col = (min_x / CELL_SIZE).floor() as i64;
    let last_col = (max_x / CELL_SIZE).floor() as i64;
    let first_row = (min_y / CELL_SIZE).floor() as i64;
    let last_row = (max_y / CELL_SIZE).floor() as i64;

    let mut cells = Vec::new();
    for row in first_row..=last_row {
        for col in first_col..=last_col {
            let center = (
                (col as f64 + 0.5) * CELL_SIZE,
                (row as f64 + 0.5) * CELL_SIZE,
            );
            match GeoCell::from_position(&center) {
                Ok(cell) => cells.push(cell),
                Err(e) => log::trace!("skipping lattice square ({}, {}): {}", col, row, e),
            }
        }
    }
    cells
}
