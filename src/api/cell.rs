use crate::core::codec::{locate, try_encode};
use crate::core::constants::CELL_SIZE;
use crate::util::coord::Coordinate;
use crate::util::error::GeoIdError;
use crate::util::identifier::GeoId;
use geo_types::{Point, Polygon, Rect, coord};

/// A single 4x4 cell of the GeoID grid.
///
/// # Example
///
/// ```
/// use geoid_rs::GeoCell;
///
/// # fn main() -> Result<(), geoid_rs::GeoIdError> {
/// let cell = GeoCell::from_position(&(123.7, -456.2))?;
/// println!("GeoID: {}", cell.geoid);
/// println!("Center: ({}, {})", cell.center().x(), cell.center().y());
///
/// // Square outline, e.g. for drawing a claim on a map
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCell {
    pub geoid: GeoId,
    /// Tile id (442-450)
    pub tile_id: u32,
    /// Column inside the tile
    pub x_cell: u32,
    /// Row inside the tile
    pub y_cell: u32,
    /// Lower-left corner in world units
    pub origin: Point<f64>,
}

impl GeoCell {
    /// Cell containing a world position. Positions in the gaps between
    /// tiles, or outside the world, have no cell.
    pub fn from_position(coord: &impl Coordinate) -> Result<Self, GeoIdError> {
        Self::from_geo_id(try_encode(coord)?)
    }

    pub fn from_geo_id(geoid: GeoId) -> Result<Self, GeoIdError> {
        let (x, y) = locate(geoid)?;
        Ok(Self {
            geoid,
            tile_id: geoid.tile_id(),
            x_cell: geoid.x_cell(),
            y_cell: geoid.y_cell(),
            origin: Point::new(x, y),
        })
    }

    pub fn center(&self) -> Point<f64> {
        let half = CELL_SIZE / 2.0;
        Point::new(self.origin.x() + half, self.origin.y() + half)
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.origin.x(), y: self.origin.y() },
            coord! { x: self.origin.x() + CELL_SIZE, y: self.origin.y() + CELL_SIZE },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Whether `coord` encodes to this cell. Lower edges are inside, upper
    /// edges belong to the next cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (x, y) = (coord.x(), coord.y());
        x >= self.origin.x()
            && x < self.origin.x() + CELL_SIZE
            && y >= self.origin.y()
            && y < self.origin.y() + CELL_SIZE
    }
}
